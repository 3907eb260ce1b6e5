//! Uniform random sampling.
//!
//! Every operation comes in two flavours: one that draws from the thread-local
//! generator returned by [`rand::rng`], and a `_with` variant that takes any
//! [`Rng`] so callers can inject a seeded generator.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use seqkit::sequence::Sequence;
//!
//! let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let drawn = sequence.sample_n_with(3, &mut rng);
//! assert_eq!(drawn.len(), 3);
//! assert!(drawn.all(|value| sequence.contains(value)));
//! assert_eq!(drawn.unique().len(), 3);
//! ```

use rand::Rng;
use rand::seq::SliceRandom;

use super::Sequence;

impl<T> Sequence<T> {
    /// Draws one element uniformly at random.
    ///
    /// Returns `T::default()` for an empty or absent sequence.
    pub fn sample(&self) -> T
    where
        T: Clone + Default,
    {
        self.sample_with(&mut rand::rng())
    }

    /// Draws one element uniformly at random using `rng`.
    ///
    /// Returns `T::default()` for an empty or absent sequence.
    pub fn sample_with<R>(&self, rng: &mut R) -> T
    where
        T: Clone + Default,
        R: Rng,
    {
        let elements = self.as_slice();
        if elements.is_empty() {
            return T::default();
        }
        elements[rng.random_range(0..elements.len())].clone()
    }

    /// Draws `count` distinct positions uniformly at random.
    ///
    /// `count == 0` or an empty input gives an empty, present sequence.
    /// `count >= len` gives a random permutation of the whole input.
    pub fn sample_n(&self, count: usize) -> Self
    where
        T: Clone,
    {
        self.sample_n_with(count, &mut rand::rng())
    }

    /// Draws `count` distinct positions uniformly at random using `rng`.
    ///
    /// Shuffles the index range `[0, len)` and keeps the first `count`
    /// indices, so no position is selected twice and every subset of size
    /// `count` is equally likely.
    pub fn sample_n_with<R>(&self, count: usize, rng: &mut R) -> Self
    where
        T: Clone,
        R: Rng + ?Sized,
    {
        let elements = self.as_slice();
        if count == 0 || elements.is_empty() {
            return Self::empty();
        }
        let mut indices: Vec<usize> = (0..elements.len()).collect();
        indices.shuffle(rng);
        indices.truncate(count);
        tracing::trace!(requested = count, drawn = indices.len(), "sample_n");
        Self::Present(indices.into_iter().map(|index| elements[index].clone()).collect())
    }

    /// Shuffles the elements in place.
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Shuffles the elements in place using `rng`.
    pub fn shuffle_with<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized,
    {
        self.as_mut_slice().shuffle(rng);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[rstest]
    fn test_sample_empty_returns_default() {
        assert_eq!(Sequence::<i32>::absent().sample(), 0);
        assert_eq!(Sequence::<String>::empty().sample_with(&mut seeded()), String::new());
    }

    #[rstest]
    fn test_sample_draws_member() {
        let sequence = Sequence::from(vec![10, 20, 30]);
        let mut rng = seeded();
        for _ in 0..50 {
            assert!(sequence.contains(&sequence.sample_with(&mut rng)));
        }
    }

    #[rstest]
    fn test_sample_n_scenario() {
        let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
        let drawn = sequence.sample_n(3);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.all(|value| sequence.contains(value)));
        assert_eq!(drawn.unique().len(), 3);
    }

    #[rstest]
    #[case(Sequence::absent(), 2)]
    #[case(Sequence::empty(), 2)]
    #[case(Sequence::from(vec![1, 2, 3]), 0)]
    fn test_sample_n_degenerate_is_present_empty(
        #[case] sequence: Sequence<i32>,
        #[case] count: usize,
    ) {
        assert_eq!(sequence.sample_n_with(count, &mut seeded()), Sequence::empty());
    }

    #[rstest]
    fn test_sample_n_oversized_is_permutation() {
        let sequence: Sequence<i32> = (0..20).collect();
        let drawn = sequence.sample_n_with(50, &mut seeded());
        assert_eq!(drawn.len(), 20);
        let mut sorted = drawn;
        sorted.sort_asc();
        assert_eq!(sorted, sequence);
    }

    #[rstest]
    fn test_sample_n_oversized_reorders_input() {
        let sequence: Sequence<i32> = (0..20).collect();
        let mut rng = seeded();
        let reordered = (0..8)
            .map(|_| sequence.sample_n_with(20, &mut rng))
            .any(|drawn| drawn != sequence);
        assert!(reordered);
    }

    #[rstest]
    fn test_sample_n_is_deterministic_for_seed() {
        let sequence: Sequence<i32> = (0..100).collect();
        let first = sequence.sample_n_with(10, &mut seeded());
        let second = sequence.sample_n_with(10, &mut seeded());
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_sample_n_distribution_is_roughly_uniform() {
        let sequence = Sequence::from(vec![0_usize, 1, 2, 3]);
        let mut rng = seeded();
        let mut hits = [0_u32; 4];
        for _ in 0..4000 {
            for value in sequence.sample_n_with(2, &mut rng) {
                hits[value] += 1;
            }
        }
        for count in hits {
            assert!((1800..=2200).contains(&count), "unexpected count {count}");
        }
    }

    #[rstest]
    fn test_shuffle_keeps_elements_and_storage() {
        let mut sequence: Sequence<i32> = (0..10).collect();
        let before = sequence.as_slice().as_ptr();
        sequence.shuffle_with(&mut seeded());
        assert_eq!(sequence.as_slice().as_ptr(), before);
        sequence.sort_asc();
        assert_eq!(sequence, (0..10).collect::<Sequence<i32>>());
    }
}
