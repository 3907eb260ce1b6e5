//! Search and indexing.
//!
//! Index lookups report a miss with [`NOT_FOUND`]. Element lookups return a
//! `(value, found)` pair, since any `T`, including `T::default()`, may be a
//! legitimate match. None of these operations panic or mutate.

use std::cmp::Ordering;

use super::Sequence;
use crate::constraints::Ordered;

/// Sentinel returned by index lookups that find nothing.
pub const NOT_FOUND: isize = -1;

#[allow(clippy::cast_possible_wrap)]
fn to_signed(position: Option<usize>) -> isize {
    position.map_or(NOT_FOUND, |index| index as isize)
}

fn cloned_or_default<T: Clone + Default>(element: Option<&T>) -> (T, bool) {
    element.map_or_else(|| (T::default(), false), |value| (value.clone(), true))
}

impl<T> Sequence<T> {
    // =========================================================================
    // Index Lookup
    // =========================================================================

    /// Returns the index of the first element equal to `target`, or
    /// [`NOT_FOUND`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::{Sequence, NOT_FOUND};
    ///
    /// let sequence = Sequence::from(vec![1, 2, 1]);
    /// assert_eq!(sequence.index(&1), 0);
    /// assert_eq!(sequence.index(&5), NOT_FOUND);
    /// ```
    pub fn index(&self, target: &T) -> isize
    where
        T: PartialEq,
    {
        self.index_func(|element| element == target)
    }

    /// Returns the index of the last element equal to `target`, or
    /// [`NOT_FOUND`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 2, 1]);
    /// assert_eq!(sequence.last_index(&1), 2);
    /// ```
    pub fn last_index(&self, target: &T) -> isize
    where
        T: PartialEq,
    {
        self.last_index_func(|element| element == target)
    }

    /// Returns the index of the first element satisfying `predicate`, or
    /// [`NOT_FOUND`].
    pub fn index_func<P>(&self, predicate: P) -> isize
    where
        P: FnMut(&T) -> bool,
    {
        to_signed(self.iter().position(predicate))
    }

    /// Returns the index of the last element satisfying `predicate`, or
    /// [`NOT_FOUND`].
    pub fn last_index_func<P>(&self, predicate: P) -> isize
    where
        P: FnMut(&T) -> bool,
    {
        to_signed(self.iter().rposition(predicate))
    }

    /// Returns `true` if any element equals `target`.
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(target)
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Equivalent to [`any`](Self::any).
    pub fn contains_func<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.any(predicate)
    }

    // =========================================================================
    // Extremes
    // =========================================================================

    /// Returns the index of the smallest element under `comparator`, keeping
    /// the first of equal elements. Returns `(0, false)` when empty.
    pub fn min_index_by<C>(&self, mut comparator: C) -> (usize, bool)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.extreme_index(|candidate, best| comparator(candidate, best) == Ordering::Less)
    }

    /// Returns the index of the largest element under `comparator`, keeping
    /// the first of equal elements. Returns `(0, false)` when empty.
    pub fn max_index_by<C>(&self, mut comparator: C) -> (usize, bool)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.extreme_index(|candidate, best| comparator(candidate, best) == Ordering::Greater)
    }

    /// Returns the index of the smallest element, first occurrence on ties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::from(vec![3, 1, 2, 1]).min_index(), (1, true));
    /// assert_eq!(Sequence::<i32>::empty().min_index(), (0, false));
    /// ```
    pub fn min_index(&self) -> (usize, bool)
    where
        T: Ordered,
    {
        self.min_index_by(T::compare)
    }

    /// Returns the index of the largest element, first occurrence on ties.
    pub fn max_index(&self) -> (usize, bool)
    where
        T: Ordered,
    {
        self.max_index_by(T::compare)
    }

    /// Single pass that replaces the stored best only on a strict win.
    fn extreme_index<F>(&self, mut beats: F) -> (usize, bool)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let elements = self.as_slice();
        if elements.is_empty() {
            return (0, false);
        }
        let mut best = 0;
        for (index, element) in elements.iter().enumerate().skip(1) {
            if beats(element, &elements[best]) {
                best = index;
            }
        }
        (best, true)
    }

    // =========================================================================
    // Element Access
    // =========================================================================

    /// Returns the first element, or `(T::default(), false)` when empty.
    pub fn first(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        cloned_or_default(self.as_slice().first())
    }

    /// Returns the last element, or `(T::default(), false)` when empty.
    pub fn last(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        cloned_or_default(self.as_slice().last())
    }

    /// Returns the element at `index`, or `(T::default(), false)` when the
    /// index is negative or past the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::from(vec![0, 7]);
    /// assert_eq!(sequence.get(1), (7, true));
    /// assert_eq!(sequence.get(0), (0, true));
    /// assert_eq!(sequence.get(2), (0, false));
    /// assert_eq!(sequence.get(-1), (0, false));
    /// ```
    pub fn get(&self, index: isize) -> (T, bool)
    where
        T: Clone + Default,
    {
        let element = usize::try_from(index)
            .ok()
            .and_then(|position| self.as_slice().get(position));
        cloned_or_default(element)
    }
}
