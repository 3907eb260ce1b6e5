//! Sorting and sortedness checks.
//!
//! Every sort rearranges the sequence in place and returns it for chaining.
//! [`Sequence::sort_by`] makes no promise about the relative order of equal
//! elements; [`Sequence::stable_sort_by`] keeps it.

use std::cmp::Ordering;

use super::Sequence;
use crate::constraints::Ordered;

impl<T> Sequence<T> {
    /// Sorts in place with `comparator`. Equal elements may be reordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let mut sequence = Sequence::from(vec![3, 1, 2]);
    /// sequence.sort_by(|left, right| right.cmp(left));
    /// assert_eq!(sequence, Sequence::from(vec![3, 2, 1]));
    /// ```
    pub fn sort_by<C>(&mut self, comparator: C) -> &mut Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(comparator);
        self
    }

    /// Sorts in place with `comparator`, keeping equal elements in their
    /// original relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let mut people = Sequence::from(vec![("bob", 30), ("amy", 25), ("cal", 30)]);
    /// people.stable_sort_by(|left, right| left.1.cmp(&right.1));
    /// assert_eq!(people, Sequence::from(vec![("amy", 25), ("bob", 30), ("cal", 30)]));
    /// ```
    pub fn stable_sort_by<C>(&mut self, comparator: C) -> &mut Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(comparator);
        self
    }

    /// Stable sort by an ordered key.
    pub fn sort_by_key<K, F>(&mut self, mut key: F) -> &mut Self
    where
        K: Ordered,
        F: FnMut(&T) -> K,
    {
        self.stable_sort_by(|left, right| key(left).compare(&key(right)))
    }

    /// Sorts in ascending order.
    pub fn sort_asc(&mut self) -> &mut Self
    where
        T: Ordered,
    {
        self.sort_by(T::compare)
    }

    /// Sorts in descending order.
    pub fn sort_desc(&mut self) -> &mut Self
    where
        T: Ordered,
    {
        self.sort_by(|left, right| right.compare(left))
    }

    /// Returns `true` if no element is `less` than its predecessor.
    ///
    /// Sequences of length 0 or 1 are sorted. Equal neighbours are allowed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 2, 5]);
    /// assert!(sequence.is_sorted_by(|left, right| left < right));
    /// assert!(!sequence.is_sorted_by(|left, right| left > right));
    /// ```
    pub fn is_sorted_by<L>(&self, mut less: L) -> bool
    where
        L: FnMut(&T, &T) -> bool,
    {
        self.as_slice()
            .windows(2)
            .all(|pair| !less(&pair[1], &pair[0]))
    }

    /// Returns `true` if the elements are in non-decreasing order.
    pub fn is_sorted_asc(&self) -> bool
    where
        T: Ordered,
    {
        self.is_sorted_by(T::is_less)
    }

    /// Returns `true` if the elements are in non-increasing order.
    pub fn is_sorted_desc(&self) -> bool
    where
        T: Ordered,
    {
        self.is_sorted_by(|left, right| right.is_less(left))
    }
}
