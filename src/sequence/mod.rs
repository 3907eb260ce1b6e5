//! The [`Sequence`] type and the algorithms defined over it.
//!
//! A `Sequence<T>` is a finite ordered collection of `T` that also remembers
//! whether it was ever constructed. Three states are observable:
//!
//! - [`SequenceState::Absent`]: no sequence was built
//! - [`SequenceState::Empty`]: a sequence exists but holds nothing
//! - [`SequenceState::NonEmpty`]: a sequence with at least one element
//!
//! Absent and empty both have length zero, but they compare unequal and many
//! operations are required to carry the distinction through. Each operation
//! documents its own rule.
//!
//! # Ownership
//!
//! Signatures state what happens to the input:
//!
//! - `&self` operations allocate and return a new sequence,
//! - `&mut self` operations (`reverse`, `rotate_*`, `sort_*`, `shuffle`)
//!   rearrange the existing storage and return it for chaining,
//! - `self` operations (`append`, `insert`, `remove_*`, `replace_*`) hand back
//!   the same storage untouched when there is nothing to do.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::sequence::{Sequence, SequenceState};
//!
//! let absent: Sequence<i32> = Sequence::absent();
//! let empty: Sequence<i32> = Sequence::empty();
//!
//! assert_eq!(absent.len(), empty.len());
//! assert_ne!(absent, empty);
//! assert_eq!(absent.state(), SequenceState::Absent);
//! assert_eq!(empty.state(), SequenceState::Empty);
//!
//! // `map` always allocates, so absent collapses to empty here.
//! assert_eq!(absent.map(|value| value * 2), Sequence::empty());
//! ```

mod manipulate;
mod pairing;
mod sample;
mod search;
mod set_algebra;
mod sort;
mod transform;

pub use pairing::{unzip, zip};
pub use search::NOT_FOUND;

use std::fmt;

/// Which of the three existence states a [`Sequence`] is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceState {
    /// No sequence was ever constructed.
    Absent,
    /// A sequence exists and holds zero elements.
    Empty,
    /// A sequence exists and holds at least one element.
    NonEmpty,
}

/// A finite ordered collection that distinguishes "absent" from "empty".
///
/// # Examples
///
/// ```rust
/// use seqkit::sequence::Sequence;
///
/// let numbers: Sequence<i32> = (1..=3).collect();
/// assert_eq!(numbers.as_slice(), &[1, 2, 3]);
/// assert!(numbers.is_present());
///
/// let nothing: Sequence<i32> = Sequence::default();
/// assert!(nothing.is_absent());
/// assert_eq!(nothing.as_slice(), &[] as &[i32]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sequence<T> {
    /// No sequence was ever constructed.
    #[default]
    Absent,
    /// A constructed sequence, possibly empty.
    Present(Vec<T>),
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);

impl<T> Sequence<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an absent sequence.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Creates a present sequence with no elements.
    #[inline]
    pub const fn empty() -> Self {
        Self::Present(Vec::new())
    }

    /// Creates a present, empty sequence with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::Present(Vec::with_capacity(capacity))
    }

    /// Creates a present sequence holding exactly one element.
    #[inline]
    pub fn singleton(element: T) -> Self {
        Self::Present(vec![element])
    }

    /// Builds an absent sequence when `items` is empty and no input was
    /// present, a present one otherwise.
    pub(crate) fn from_parts(any_input_present: bool, items: Vec<T>) -> Self {
        if !any_input_present && items.is_empty() {
            Self::Absent
        } else {
            Self::Present(items)
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns which existence state this sequence is in.
    pub fn state(&self) -> SequenceState {
        match self {
            Self::Absent => SequenceState::Absent,
            Self::Present(items) if items.is_empty() => SequenceState::Empty,
            Self::Present(_) => SequenceState::NonEmpty,
        }
    }

    /// Returns `true` if no sequence was ever constructed.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the sequence was constructed, empty or not.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns the number of elements. Absent sequences have length zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the sequence has no elements, absent or empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Returns the elements as a slice. Absent sequences yield `&[]`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Absent => &[],
            Self::Present(items) => items,
        }
    }

    /// Returns the elements as a mutable slice. Absent sequences yield `&mut []`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Self::Absent => &mut [],
            Self::Present(items) => items,
        }
    }

    /// Returns the backing vector, or `None` when absent.
    #[inline]
    pub fn as_vec(&self) -> Option<&Vec<T>> {
        match self {
            Self::Absent => None,
            Self::Present(items) => Some(items),
        }
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the backing vector, or `None` when absent.
    #[inline]
    pub fn into_option(self) -> Option<Vec<T>> {
        match self {
            Self::Absent => None,
            Self::Present(items) => Some(items),
        }
    }

    /// Converts into a vector. Absent sequences yield an empty vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.into_option().unwrap_or_default()
    }

    /// Returns the backing vector, constructing an empty one if absent.
    pub(crate) fn present_mut(&mut self) -> &mut Vec<T> {
        if self.is_absent() {
            *self = Self::empty();
        }
        match self {
            Self::Present(items) => items,
            Self::Absent => unreachable!("absent sequence was just replaced"),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Present(items)
    }
}

impl<T> From<Option<Vec<T>>> for Sequence<T> {
    #[inline]
    fn from(items: Option<Vec<T>>) -> Self {
        items.map_or(Self::Absent, Self::Present)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Self::Present(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::Present(Vec::from(items))
    }
}

impl<T> From<Sequence<T>> for Option<Vec<T>> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_option()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Present(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    /// Extends the sequence, making an absent sequence present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.present_mut().extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(formatter, "<absent>"),
            Self::Present(items) => {
                write!(formatter, "[")?;
                for (index, element) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Sequence<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_vec().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<Vec<T>>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
