//! Pair type - an ordered two-element tuple.
//!
//! [`Pair<A, B>`] is the container produced by
//! [`zip`](crate::sequence::zip) and consumed by
//! [`unzip`](crate::sequence::unzip). It converts freely to and from `(A, B)`.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::pair::Pair;
//!
//! let pair = Pair::new(1, "one");
//! assert_eq!(pair.first, 1);
//! assert_eq!(pair.second, "one");
//!
//! let (number, word) = pair.into_tuple();
//! assert_eq!((number, word), (1, "one"));
//! ```

use std::fmt;

/// An ordered 2-tuple.
///
/// # Type Parameters
///
/// * `A` - The type of the first element
/// * `B` - The type of the second element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    /// The first element.
    pub first: A,
    /// The second element.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair from its two elements.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Converts the pair into a tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Returns a pair with the elements in the opposite order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::pair::Pair;
    ///
    /// assert_eq!(Pair::new(1, 'a').swap(), Pair::new('a', 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}
