//! Set algebra over sequences.
//!
//! These operations keep the order of their first argument and use an
//! auxiliary hash set for membership, so elements must be `Eq + Hash`.
//! `intersection` and `difference` keep every duplicate from the left-hand
//! side; `unique` and `union` deduplicate.
//!
//! The result is absent only when every input was absent; otherwise it is
//! present, even if empty.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::Sequence;
//!
//! let left = Sequence::from(vec![1, 2, 2, 3]);
//! let right = Sequence::from(vec![2, 4]);
//!
//! assert_eq!(left.intersection(&right), Sequence::from(vec![2, 2]));
//! assert_eq!(left.difference(&right), Sequence::from(vec![1, 3]));
//! assert_eq!(left.union(&right), Sequence::from(vec![1, 2, 3, 4]));
//! ```

use std::hash::Hash;

use super::Sequence;
use crate::hash::{SequenceHashSet, new_set};

impl<T> Sequence<T>
where
    T: Eq + Hash + Clone,
{
    fn membership(&self) -> SequenceHashSet<&T> {
        let mut members = new_set(self.len());
        members.extend(self.iter());
        members
    }

    /// Drops later duplicates, keeping first occurrences in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let unique = Sequence::from(vec![2, 2, 1, 3, 1]).unique();
    /// assert_eq!(unique, Sequence::from(vec![2, 1, 3]));
    /// ```
    pub fn unique(&self) -> Self {
        let mut seen = new_set(self.len());
        let items = self
            .iter()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect();
        Self::from_parts(self.is_present(), items)
    }

    /// Drops elements whose `key` was already produced by an earlier element.
    pub fn unique_by<K, F>(&self, mut key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = new_set(self.len());
        let items = self
            .iter()
            .filter(|element| seen.insert(key(element)))
            .cloned()
            .collect();
        Self::from_parts(self.is_present(), items)
    }

    /// Returns `self` followed by the elements of `other` not already
    /// contributed, deduplicated overall with first occurrences winning.
    pub fn union(&self, other: &Self) -> Self {
        let mut seen = new_set(self.len() + other.len());
        let items = self
            .iter()
            .chain(other.iter())
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect();
        Self::from_parts(self.is_present() || other.is_present(), items)
    }

    /// Returns the elements of `self` that also occur in `other`, keeping
    /// `self`'s order and duplicate count.
    pub fn intersection(&self, other: &Self) -> Self {
        let members = other.membership();
        let items = self
            .iter()
            .filter(|element| members.contains(element))
            .cloned()
            .collect();
        Self::from_parts(self.is_present() || other.is_present(), items)
    }

    /// Returns the elements of `self` that do not occur in `other`, keeping
    /// `self`'s order and duplicate count.
    pub fn difference(&self, other: &Self) -> Self {
        let members = other.membership();
        let items = self
            .iter()
            .filter(|element| !members.contains(element))
            .cloned()
            .collect();
        Self::from_parts(self.is_present() || other.is_present(), items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![2, 2, 1, 3, 1], vec![2, 1, 3])]
    #[case(vec![1, 1, 1], vec![1])]
    #[case(vec![], vec![])]
    fn test_unique(#[case] elements: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(Sequence::from(elements).unique(), Sequence::from(expected));
    }

    #[rstest]
    fn test_unique_absent_stays_absent() {
        assert!(Sequence::<i32>::absent().unique().is_absent());
    }

    #[rstest]
    fn test_unique_by_first_key_wins() {
        let words = Sequence::from(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
        let firsts = words.unique_by(|word| word.chars().next());
        assert_eq!(firsts, Sequence::from(vec!["apple", "banana", "cherry"]));
    }

    #[rstest]
    fn test_difference_keeps_duplicates() {
        let left = Sequence::from(vec![1, 2, 2, 3]);
        let right = Sequence::from(vec![4]);
        assert_eq!(left.difference(&right), Sequence::from(vec![1, 2, 2, 3]));
    }

    #[rstest]
    fn test_intersection_keeps_left_duplicates() {
        let left = Sequence::from(vec![3, 1, 3, 2, 3]);
        let right = Sequence::from(vec![3, 2]);
        assert_eq!(left.intersection(&right), Sequence::from(vec![3, 3, 2, 3]));
    }

    #[rstest]
    fn test_union_order_and_dedup() {
        let left = Sequence::from(vec![3, 1, 3]);
        let right = Sequence::from(vec![2, 1, 4, 2]);
        assert_eq!(left.union(&right), Sequence::from(vec![3, 1, 2, 4]));
    }

    #[rstest]
    fn test_all_absent_inputs_give_absent() {
        let absent: Sequence<i32> = Sequence::absent();
        assert!(absent.union(&absent).is_absent());
        assert!(absent.intersection(&absent).is_absent());
        assert!(absent.difference(&absent).is_absent());
    }

    #[rstest]
    fn test_any_present_input_gives_present() {
        let absent: Sequence<i32> = Sequence::absent();
        let empty: Sequence<i32> = Sequence::empty();
        assert_eq!(absent.union(&empty), Sequence::empty());
        assert_eq!(absent.intersection(&empty), Sequence::empty());
        assert_eq!(empty.difference(&absent), Sequence::empty());
        assert_eq!(
            absent.intersection(&Sequence::from(vec![1])),
            Sequence::empty()
        );
    }
}
