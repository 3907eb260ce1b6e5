//! Transformation and aggregation.
//!
//! Allocating operations (`map`, `filter`, `flat_map`) always return a
//! present sequence: building the output constructs a container, so an absent
//! input collapses to [`Sequence::empty`] here. `reverse` is the only
//! in-place operation in this module.

use std::hash::Hash;

use super::Sequence;
use crate::constraints::{Numeric, Ordered};
use crate::error::DuplicateKeyError;
use crate::hash::{SequenceHashMap, new_map};

impl<T> Sequence<T> {
    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to every element, preserving length and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let doubled = Sequence::from(vec![1, 2, 3]).map(|value| value * 2);
    /// assert_eq!(doubled, Sequence::from(vec![2, 4, 6]));
    ///
    /// let absent: Sequence<i32> = Sequence::absent();
    /// assert_eq!(absent.map(|value| value * 2), Sequence::empty());
    /// ```
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence::Present(self.iter().map(function).collect())
    }

    /// Maps each element to an iterable and flattens the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let expanded = Sequence::from(vec![1, 3]).flat_map(|value| vec![*value; *value as usize]);
    /// assert_eq!(expanded, Sequence::from(vec![1, 3, 3, 3]));
    /// ```
    pub fn flat_map<U, I, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T) -> I,
        I: IntoIterator<Item = U>,
    {
        Sequence::Present(self.iter().flat_map(function).collect())
    }

    /// Keeps the elements satisfying `predicate`, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Self::Present(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Splits into the elements satisfying `predicate` and the rest, both in
    /// input order. An absent input yields two absent outputs.
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        if self.is_absent() {
            return (Self::Absent, Self::Absent);
        }
        let (matched, rest): (Vec<T>, Vec<T>) =
            self.iter().cloned().partition(|element| predicate(element));
        (Self::Present(matched), Self::Present(rest))
    }

    /// Splits into consecutive chunks of `size` elements; the last chunk may
    /// be shorter. `size == 0` yields an empty sequence and an absent input
    /// stays absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let chunks = Sequence::from(vec![1, 2, 3, 4, 5]).chunk(2);
    /// assert_eq!(chunks, Sequence::from(vec![vec![1, 2], vec![3, 4], vec![5]]));
    /// ```
    pub fn chunk(&self, size: usize) -> Sequence<Vec<T>>
    where
        T: Clone,
    {
        match self {
            Self::Absent => Sequence::Absent,
            Self::Present(_) if size == 0 => Sequence::empty(),
            Self::Present(items) => items.chunks(size).map(<[T]>::to_vec).collect(),
        }
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Folds the elements left to right starting from `initial`.
    ///
    /// Returns `initial` unchanged for an empty or absent sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::from(vec!["a", "b", "c"]);
    /// let joined = sequence.reduce(|accumulator, element| accumulator + *element, String::new());
    /// assert_eq!(joined, "abc");
    /// ```
    pub fn reduce<A, F>(&self, function: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(initial, function)
    }

    /// Sums the elements. Empty and absent sequences sum to [`Numeric::zero`].
    pub fn sum(&self) -> T
    where
        T: Numeric,
    {
        self.reduce(|accumulator, element| accumulator.plus(*element), T::zero())
    }

    /// Returns the smallest element, first occurrence on ties.
    pub fn min(&self) -> (T, bool)
    where
        T: Ordered + Clone + Default,
    {
        let (index, found) = self.min_index();
        self.element_or_default(index, found)
    }

    /// Returns the largest element, first occurrence on ties.
    pub fn max(&self) -> (T, bool)
    where
        T: Ordered + Clone + Default,
    {
        let (index, found) = self.max_index();
        self.element_or_default(index, found)
    }

    fn element_or_default(&self, index: usize, found: bool) -> (T, bool)
    where
        T: Clone + Default,
    {
        match self.as_slice().get(index) {
            Some(element) if found => (element.clone(), true),
            _ => (T::default(), false),
        }
    }

    // =========================================================================
    // Finding
    // =========================================================================

    /// Returns the first element satisfying `predicate`, or
    /// `(T::default(), false)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 4, 6]);
    /// assert_eq!(sequence.find(|value| value % 2 == 0), (4, true));
    /// assert_eq!(sequence.find(|value| *value > 10), (0, false));
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> (T, bool)
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|element| predicate(element))
            .map_or_else(|| (T::default(), false), |element| (element.clone(), true))
    }

    /// Returns the last element satisfying `predicate`, or
    /// `(T::default(), false)`.
    pub fn find_last<P>(&self, mut predicate: P) -> (T, bool)
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .rev()
            .find(|element| predicate(element))
            .map_or_else(|| (T::default(), false), |element| (element.clone(), true))
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if any element satisfies `predicate`. Stops at the
    /// first match.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`. Stops at the
    /// first failure; `true` for empty and absent sequences.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if no element satisfies `predicate`.
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(predicate)
    }

    /// Counts the elements equal to `target`.
    pub fn count(&self, target: &T) -> usize
    where
        T: PartialEq,
    {
        self.count_func(|element| element == target)
    }

    /// Counts the elements satisfying `predicate`.
    pub fn count_func<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).count()
    }

    // =========================================================================
    // Grouping
    // =========================================================================

    /// Groups elements by `key`, keeping each group in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let groups = Sequence::from(vec![1, 2, 3, 4, 5]).group_by(|value| value % 2 == 0);
    /// assert_eq!(groups[&false], vec![1, 3, 5]);
    /// assert_eq!(groups[&true], vec![2, 4]);
    /// ```
    pub fn group_by<K, F>(&self, mut key: F) -> SequenceHashMap<K, Vec<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: SequenceHashMap<K, Vec<T>> = new_map(0);
        for element in self {
            groups.entry(key(element)).or_default().push(element.clone());
        }
        groups
    }

    /// Maps each element to a unique key.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] as soon as two elements produce the same
    /// key. No partial map is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let users = Sequence::from(vec![(1, "a"), (2, "b")]);
    /// let by_id = users.unique_group_by(|user| user.0).unwrap();
    /// assert_eq!(by_id[&2], (2, "b"));
    ///
    /// let clash = Sequence::from(vec![(1, "a"), (1, "b")]);
    /// assert!(clash.unique_group_by(|user| user.0).is_err());
    /// ```
    pub fn unique_group_by<K, F>(
        &self,
        mut key: F,
    ) -> Result<SequenceHashMap<K, T>, DuplicateKeyError<K>>
    where
        T: Clone,
        K: Eq + Hash + Clone + std::fmt::Debug,
        F: FnMut(&T) -> K,
    {
        let mut positions: SequenceHashMap<K, usize> = new_map(self.len());
        let mut groups: SequenceHashMap<K, T> = new_map(self.len());
        for (index, element) in self.iter().enumerate() {
            let element_key = key(element);
            if let Some(&first_index) = positions.get(&element_key) {
                tracing::debug!(
                    key = ?element_key,
                    first_index,
                    duplicate_index = index,
                    "unique_group_by rejected duplicate key"
                );
                return Err(DuplicateKeyError {
                    key: element_key,
                    first_index,
                    duplicate_index: index,
                });
            }
            positions.insert(element_key.clone(), index);
            groups.insert(element_key, element.clone());
        }
        Ok(groups)
    }

    // =========================================================================
    // Reversal
    // =========================================================================

    /// Reverses the elements in place and returns the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let mut sequence = Sequence::from(vec![1, 2, 3]);
    /// sequence.reverse();
    /// assert_eq!(sequence, Sequence::from(vec![3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) -> &mut Self {
        reverse_range(self.as_mut_slice());
        self
    }
}

/// Two-pointer swap towards the middle.
pub(super) fn reverse_range<T>(elements: &mut [T]) {
    let length = elements.len();
    for index in 0..length / 2 {
        elements.swap(index, length - 1 - index);
    }
}
