//! Zipping, unzipping and concatenation.
//!
//! Copying is [`Clone`]: a shallow element-wise duplicate that keeps an absent
//! sequence absent.

use super::Sequence;
use crate::pair::Pair;

/// Pairs up elements of `left` and `right` position by position, stopping at
/// the shorter input.
///
/// Two absent inputs give an absent result; otherwise the result is present.
///
/// # Examples
///
/// ```rust
/// use seqkit::pair::Pair;
/// use seqkit::sequence::{zip, Sequence};
///
/// let zipped = zip(&Sequence::from(vec![1, 2, 3]), &Sequence::from(vec!['a', 'b']));
/// assert_eq!(zipped, Sequence::from(vec![Pair::new(1, 'a'), Pair::new(2, 'b')]));
/// ```
pub fn zip<A, B>(left: &Sequence<A>, right: &Sequence<B>) -> Sequence<Pair<A, B>>
where
    A: Clone,
    B: Clone,
{
    let pairs = left
        .iter()
        .zip(right.iter())
        .map(|(first, second)| Pair::new(first.clone(), second.clone()))
        .collect();
    Sequence::from_parts(left.is_present() || right.is_present(), pairs)
}

/// Splits a sequence of pairs into the sequence of first elements and the
/// sequence of second elements.
///
/// An absent input gives two absent outputs; a present one, even empty, gives
/// two present outputs.
///
/// # Examples
///
/// ```rust
/// use seqkit::pair::Pair;
/// use seqkit::sequence::{unzip, Sequence};
///
/// let pairs = Sequence::from(vec![Pair::new(1, 'a'), Pair::new(2, 'b')]);
/// let (numbers, letters) = unzip(&pairs);
/// assert_eq!(numbers, Sequence::from(vec![1, 2]));
/// assert_eq!(letters, Sequence::from(vec!['a', 'b']));
/// ```
pub fn unzip<A, B>(pairs: &Sequence<Pair<A, B>>) -> (Sequence<A>, Sequence<B>)
where
    A: Clone,
    B: Clone,
{
    match pairs {
        Sequence::Absent => (Sequence::Absent, Sequence::Absent),
        Sequence::Present(items) => {
            let (firsts, seconds): (Vec<A>, Vec<B>) = items
                .iter()
                .map(|pair| (pair.first.clone(), pair.second.clone()))
                .unzip();
            (Sequence::Present(firsts), Sequence::Present(seconds))
        }
    }
}

impl<T> Sequence<T> {
    /// Concatenates `sequences` into a newly allocated sequence.
    ///
    /// Zero sequences, or only absent ones, give an absent result. As soon as
    /// one input is present the result is present, even if empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqkit::sequence::Sequence;
    ///
    /// let joined = Sequence::concat([&Sequence::from(vec![1]), &Sequence::absent(), &Sequence::from(vec![2, 3])]);
    /// assert_eq!(joined, Sequence::from(vec![1, 2, 3]));
    ///
    /// let nothing: Sequence<i32> = Sequence::concat([]);
    /// assert!(nothing.is_absent());
    /// ```
    pub fn concat<'a, I>(sequences: I) -> Self
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        let mut any_present = false;
        let mut items = Vec::new();
        for sequence in sequences {
            if let Self::Present(elements) = sequence {
                any_present = true;
                items.extend_from_slice(elements);
            }
        }
        Self::from_parts(any_present, items)
    }
}
