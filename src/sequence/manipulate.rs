//! Insertion, removal, replacement and rotation.
//!
//! Insertion, removal and replacement consume the sequence and hand back the
//! same storage. An out-of-range index or a missing element is a no-op, so the
//! returned sequence is the input itself, absent or not. Rotation works in
//! place through `&mut self`.

use super::Sequence;
use super::transform::reverse_range;

impl<T> Sequence<T> {
    // =========================================================================
    // Insertion
    // =========================================================================

    /// Adds `element` at the end. An absent sequence becomes present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::absent().append(1).append(2);
    /// assert_eq!(sequence, Sequence::from(vec![1, 2]));
    /// ```
    #[must_use]
    pub fn append(mut self, element: T) -> Self {
        self.present_mut().push(element);
        self
    }

    /// Adds `element` at the front. An absent sequence becomes present.
    #[must_use]
    pub fn prepend(mut self, element: T) -> Self {
        self.present_mut().insert(0, element);
        self
    }

    /// Inserts `element` before position `index`.
    ///
    /// `index <= 0` prepends and `index >= len` appends; this never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::from(vec![1, 3]);
    /// assert_eq!(sequence.clone().insert(1, 2), Sequence::from(vec![1, 2, 3]));
    /// assert_eq!(sequence.clone().insert(-4, 0), Sequence::from(vec![0, 1, 3]));
    /// assert_eq!(sequence.insert(99, 4), Sequence::from(vec![1, 3, 4]));
    /// ```
    #[must_use]
    pub fn insert(self, index: isize, element: T) -> Self {
        let Ok(position) = usize::try_from(index) else {
            return self.prepend(element);
        };
        if position == 0 {
            return self.prepend(element);
        }
        if position >= self.len() {
            return self.append(element);
        }
        let mut sequence = self;
        sequence.present_mut().insert(position, element);
        sequence
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes the first element equal to `target`.
    ///
    /// Returns the input unchanged if nothing matches.
    #[must_use]
    pub fn remove(self, target: &T) -> Self
    where
        T: PartialEq,
    {
        let position = self.iter().position(|element| element == target);
        match (self, position) {
            (Self::Present(mut items), Some(index)) => {
                items.remove(index);
                Self::Present(items)
            }
            (sequence, _) => sequence,
        }
    }

    /// Removes the element at `index`.
    ///
    /// An out-of-range or negative index returns the original sequence
    /// untouched, same storage included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).remove_at(1), Sequence::from(vec![1, 3]));
    /// assert_eq!(Sequence::from(vec![1, 2]).remove_at(5), Sequence::from(vec![1, 2]));
    /// ```
    #[must_use]
    pub fn remove_at(self, index: isize) -> Self {
        match (self, usize::try_from(index)) {
            (Self::Present(mut items), Ok(position)) if position < items.len() => {
                items.remove(position);
                Self::Present(items)
            }
            (sequence, _) => sequence,
        }
    }

    /// Removes every element equal to `target`.
    #[must_use]
    pub fn remove_all(self, target: &T) -> Self
    where
        T: PartialEq,
    {
        self.remove_func(|element| element == target)
    }

    /// Removes every element satisfying `predicate`, keeping the order of the
    /// rest. When nothing matches the original sequence is returned.
    #[must_use]
    pub fn remove_func<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Self::Present(mut items) => {
                items.retain(|element| !predicate(element));
                Self::Present(items)
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Replacement
    // =========================================================================

    /// Replaces the first `limit` elements equal to `old` with clones of
    /// `new`, scanning from the front. `None` replaces every match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let sequence = Sequence::from(vec![0, 1, 0, 1, 0]);
    /// assert_eq!(
    ///     sequence.clone().replace(&0, 9, Some(2)),
    ///     Sequence::from(vec![9, 1, 9, 1, 0])
    /// );
    /// assert_eq!(
    ///     sequence.replace(&0, 9, None),
    ///     Sequence::from(vec![9, 1, 9, 1, 9])
    /// );
    /// ```
    #[must_use]
    pub fn replace(mut self, old: &T, new: T, limit: Option<usize>) -> Self
    where
        T: PartialEq + Clone,
    {
        let mut remaining = limit.unwrap_or(usize::MAX);
        for element in self.iter_mut() {
            if remaining == 0 {
                break;
            }
            if *element == *old {
                *element = new.clone();
                remaining -= 1;
            }
        }
        self
    }

    /// Replaces every element equal to `old` with clones of `new`.
    #[must_use]
    pub fn replace_all(self, old: &T, new: T) -> Self
    where
        T: PartialEq + Clone,
    {
        self.replace(old, new, None)
    }

    /// Overwrites the element at `index` with `element`.
    ///
    /// An out-of-range or negative index returns the original sequence
    /// untouched.
    #[must_use]
    pub fn replace_at(mut self, index: isize, element: T) -> Self {
        if let Some(slot) = usize::try_from(index)
            .ok()
            .and_then(|position| self.as_mut_slice().get_mut(position))
        {
            *slot = element;
        }
        self
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    /// Rotates the elements `shift` positions to the left, in place.
    ///
    /// `shift` is normalised into `[0, len)` first, so negative shifts rotate
    /// right. The rotation reverses `[0, shift)`, then `[shift, len)`, then
    /// the whole sequence: O(n) time and O(1) extra space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let mut sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// sequence.rotate_left(2);
    /// assert_eq!(sequence, Sequence::from(vec![3, 4, 5, 1, 2]));
    ///
    /// sequence.rotate_left(-2);
    /// assert_eq!(sequence, Sequence::from(vec![1, 2, 3, 4, 5]));
    /// ```
    pub fn rotate_left(&mut self, shift: isize) -> &mut Self {
        let length = self.len();
        if length == 0 || shift == 0 {
            return self;
        }
        let pivot = normalize_shift(shift, length);
        tracing::trace!(shift, pivot, length, "rotate_left");
        if pivot != 0 {
            let elements = self.as_mut_slice();
            reverse_range(&mut elements[..pivot]);
            reverse_range(&mut elements[pivot..]);
            reverse_range(elements);
        }
        self
    }

    /// Rotates the elements `shift` positions to the right, in place.
    ///
    /// Equivalent to `rotate_left(-shift)`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn rotate_right(&mut self, shift: isize) -> &mut Self {
        let length = self.len();
        if length == 0 {
            return self;
        }
        let pivot = normalize_shift(shift, length);
        self.rotate_left(-(pivot as isize))
    }
}

/// Maps any shift onto `[0, length)`, correcting negative remainders.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn normalize_shift(shift: isize, length: usize) -> usize {
    shift.rem_euclid(length as isize) as usize
}
