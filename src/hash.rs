//! Hasher selection for grouping and set algebra.
//!
//! The hash maps and sets built by `group_by`, `unique`, `union`,
//! `intersection` and `difference` use [`SequenceBuildHasher`], chosen at
//! compile time:
//!
//! | Feature  | Hasher                                    |
//! |----------|-------------------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`               |
//! | `ahash`  | `ahash::RandomState`                      |
//! | neither  | `std::collections::hash_map::RandomState` |
//!
//! When both features are enabled `fxhash` wins.

use std::collections::{HashMap, HashSet};

/// Build hasher used by every hash-based operation in this crate.
#[cfg(feature = "fxhash")]
pub type SequenceBuildHasher = rustc_hash::FxBuildHasher;

/// Build hasher used by every hash-based operation in this crate.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type SequenceBuildHasher = ahash::RandomState;

/// Build hasher used by every hash-based operation in this crate.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type SequenceBuildHasher = std::collections::hash_map::RandomState;

/// Hash map returned by `group_by` and `unique_group_by`.
pub type SequenceHashMap<K, V> = HashMap<K, V, SequenceBuildHasher>;

/// Hash set used for membership checks.
pub type SequenceHashSet<T> = HashSet<T, SequenceBuildHasher>;

/// Creates an empty [`SequenceHashMap`] with room for `capacity` entries.
#[inline]
pub fn new_map<K, V>(capacity: usize) -> SequenceHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, SequenceBuildHasher::default())
}

/// Creates an empty [`SequenceHashSet`] with room for `capacity` elements.
#[inline]
pub fn new_set<T>(capacity: usize) -> SequenceHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, SequenceBuildHasher::default())
}
