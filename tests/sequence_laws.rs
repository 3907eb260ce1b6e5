//! Property-based tests for Sequence laws.
//!
//! This module verifies the algebraic laws and invariants of the sequence
//! operations using proptest.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use seqkit::prelude::*;
use std::collections::HashSet;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..20_i32, 0..40)
}

// =============================================================================
// Rotation Laws
// =============================================================================

proptest! {
    /// Rotation Inverse Law: rotating left by k then by len - k restores the input
    #[test]
    fn prop_rotate_left_is_invertible(elements in small_vec(), shift in -100_isize..100) {
        let original = Sequence::from(elements);
        let mut rotated = original.clone();
        let length = isize::try_from(original.len()).unwrap();
        rotated.rotate_left(shift).rotate_left(length - shift);
        prop_assert_eq!(rotated, original);
    }

    /// Rotation Identity Law: rotating by zero changes nothing
    #[test]
    fn prop_rotate_left_zero_is_identity(elements in small_vec()) {
        let original = Sequence::from(elements);
        let mut rotated = original.clone();
        rotated.rotate_left(0);
        prop_assert_eq!(rotated, original);
    }

    /// Rotation Direction Law: rotate_right undoes rotate_left
    #[test]
    fn prop_rotate_right_undoes_rotate_left(elements in small_vec(), shift in any::<isize>()) {
        let original = Sequence::from(elements);
        let mut rotated = original.clone();
        rotated.rotate_left(shift).rotate_right(shift);
        prop_assert_eq!(rotated, original);
    }

    /// Rotation matches the standard library slice rotation
    #[test]
    fn prop_rotate_left_matches_slice_rotate(elements in prop::collection::vec(any::<i32>(), 1..40), shift in 0_usize..80) {
        let mut expected = elements.clone();
        expected.rotate_left(shift % elements.len());
        let mut rotated = Sequence::from(elements);
        rotated.rotate_left(isize::try_from(shift).unwrap());
        prop_assert_eq!(rotated.into_vec(), expected);
    }
}

// =============================================================================
// Set Algebra Laws
// =============================================================================

proptest! {
    /// Unique Law: no duplicates, first-occurrence subsequence of the input
    #[test]
    fn prop_unique_has_no_duplicates_and_keeps_first_order(elements in small_vec()) {
        let sequence = Sequence::from(elements.clone());
        let unique = sequence.unique();

        let distinct: HashSet<i32> = unique.iter().copied().collect();
        prop_assert_eq!(distinct.len(), unique.len());

        let mut seen = HashSet::new();
        let expected: Vec<i32> = elements.into_iter().filter(|value| seen.insert(*value)).collect();
        prop_assert_eq!(unique.into_vec(), expected);
    }

    /// Partition Law: intersection and difference split the left side
    #[test]
    fn prop_intersection_and_difference_partition_left(left in small_vec(), right in small_vec()) {
        let left = Sequence::from(left);
        let right = Sequence::from(right);
        let intersection = left.intersection(&right);
        let difference = left.difference(&right);

        prop_assert_eq!(intersection.len() + difference.len(), left.len());
        prop_assert!(intersection.all(|value| left.contains(value) && right.contains(value)));
        prop_assert!(difference.none(|value| right.contains(value)));
    }

    /// Union Law: union equals unique of the concatenation
    #[test]
    fn prop_union_is_unique_concat(left in small_vec(), right in small_vec()) {
        let left = Sequence::from(left);
        let right = Sequence::from(right);
        prop_assert_eq!(left.union(&right), Sequence::concat([&left, &right]).unique());
    }
}

// =============================================================================
// Sorting Laws
// =============================================================================

proptest! {
    /// Stability Law: equal keys keep their input order
    #[test]
    fn prop_stable_sort_by_is_stable(keys in prop::collection::vec(0..5_u8, 0..60)) {
        let tagged: Sequence<(u8, usize)> = keys.into_iter().enumerate().map(|(index, key)| (key, index)).collect();
        let mut sorted = tagged.clone();
        sorted.stable_sort_by(|left, right| left.0.cmp(&right.0));

        prop_assert!(sorted.is_sorted_by(|left, right| left.0 < right.0));
        let stable = sorted
            .as_slice()
            .windows(2)
            .all(|pair| pair[0].0 != pair[1].0 || pair[0].1 < pair[1].1);
        prop_assert!(stable);
    }

    /// Unstable sort still produces a sorted permutation
    #[test]
    fn prop_sort_by_sorts(elements in small_vec()) {
        let mut sorted = Sequence::from(elements.clone());
        sorted.sort_by(Ord::cmp);
        let mut expected = elements;
        expected.sort_unstable();
        prop_assert!(sorted.is_sorted_asc());
        prop_assert_eq!(sorted.into_vec(), expected);
    }

    /// Descending sort is the reverse of ascending sort
    #[test]
    fn prop_sort_desc_reverses_sort_asc(elements in small_vec()) {
        let mut ascending = Sequence::from(elements.clone());
        ascending.sort_asc();
        let mut descending = Sequence::from(elements);
        descending.sort_desc();
        prop_assert!(descending.is_sorted_desc());
        ascending.reverse();
        prop_assert_eq!(ascending, descending);
    }
}

// =============================================================================
// Pairing Laws
// =============================================================================

proptest! {
    /// Zip-Unzip Law: unzip(zip(a, b)) truncates both sides to the shorter length
    #[test]
    fn prop_unzip_zip_truncates(left in small_vec(), right in prop::collection::vec(any::<char>(), 0..40)) {
        let shortest = left.len().min(right.len());
        let (first, second) = unzip(&zip(&Sequence::from(left.clone()), &Sequence::from(right.clone())));
        prop_assert_eq!(first.into_vec(), left[..shortest].to_vec());
        prop_assert_eq!(second.into_vec(), right[..shortest].to_vec());
    }

    /// Concat Length Law: the result length is the sum of the input lengths
    #[test]
    fn prop_concat_length(left in small_vec(), right in small_vec()) {
        let expected = left.len() + right.len();
        let joined = Sequence::concat([&Sequence::from(left), &Sequence::from(right)]);
        prop_assert_eq!(joined.len(), expected);
    }
}

// =============================================================================
// Search, Transformation and Manipulation Laws
// =============================================================================

proptest! {
    /// Index Law: index and last_index point at matching elements with nothing equal outside
    #[test]
    fn prop_index_bounds(elements in small_vec(), target in 0..20_i32) {
        let sequence = Sequence::from(elements);
        let first = sequence.index(&target);
        let last = sequence.last_index(&target);
        if sequence.contains(&target) {
            prop_assert_eq!(sequence.get(first), (target, true));
            prop_assert_eq!(sequence.get(last), (target, true));
            prop_assert!(first <= last);
        } else {
            prop_assert_eq!(first, NOT_FOUND);
            prop_assert_eq!(last, NOT_FOUND);
        }
    }

    /// Group-By Law: groups partition the input without losing elements
    #[test]
    fn prop_group_by_preserves_elements(elements in small_vec()) {
        let sequence = Sequence::from(elements);
        let groups = sequence.group_by(|value| value % 3);
        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, sequence.len());
        for (key, members) in &groups {
            let expected = sequence.filter(|value| value % 3 == *key).into_vec();
            prop_assert_eq!(members, &expected);
        }
    }

    /// Insert-RemoveAt Law: removing what was inserted restores the input
    #[test]
    fn prop_insert_then_remove_at(elements in small_vec(), index in 0_isize..40, value: i32) {
        let original = Sequence::from(elements);
        let clamped = index.min(isize::try_from(original.len()).unwrap());
        let restored = original.clone().insert(index, value).remove_at(clamped);
        prop_assert_eq!(restored, original);
    }

    /// Reverse Involution Law: reversing twice is the identity
    #[test]
    fn prop_reverse_twice_is_identity(elements in small_vec()) {
        let original = Sequence::from(elements);
        let mut reversed = original.clone();
        reversed.reverse().reverse();
        prop_assert_eq!(reversed, original);
    }

    /// None Law: none is the negation of any
    #[test]
    fn prop_none_is_not_any(elements in small_vec(), threshold in 0..20_i32) {
        let sequence = Sequence::from(elements);
        prop_assert_eq!(
            sequence.none(|value| *value > threshold),
            !sequence.any(|value| *value > threshold)
        );
    }
}

// =============================================================================
// Sampling Laws
// =============================================================================

proptest! {
    /// Sample-N Law: draws are distinct positions of the input
    #[test]
    fn prop_sample_n_draws_distinct_positions(length in 0_usize..40, count in 0_usize..50, seed: u64) {
        let sequence: Sequence<usize> = (0..length).collect();
        let drawn = sequence.sample_n_with(count, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(drawn.len(), count.min(length));
        prop_assert_eq!(drawn.unique().len(), drawn.len());
        prop_assert!(drawn.all(|value| *value < length));
    }
}
