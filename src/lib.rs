//! # seqkit
//!
//! Generic, in-memory algorithms over finite ordered sequences.
//!
//! ## Overview
//!
//! Every operation works on [`Sequence<T>`](sequence::Sequence), a vector that
//! also remembers whether it was ever constructed. The library includes:
//!
//! - **Search & Indexing**: `index`, `last_index`, `min_index`, `get`, ...
//! - **Transformation & Aggregation**: `map`, `filter`, `reduce`, `group_by`, ...
//! - **Manipulation**: `insert`, `remove_at`, `replace`, `rotate_left`, ...
//! - **Set Algebra**: `unique`, `union`, `intersection`, `difference`
//! - **Sorting**: `sort_by`, `stable_sort_by`, `sort_asc`, `is_sorted_by`, ...
//! - **Sampling**: `sample`, `sample_n`, `shuffle`
//! - **Pairing**: `zip`, `unzip`, `concat`
//!
//! ## Signalling absence
//!
//! Nothing in this crate panics on an out-of-range index. Absence is reported
//! in one of three ways:
//!
//! - index lookups return [`NOT_FOUND`](sequence::NOT_FOUND) (`-1`),
//! - element lookups return a `(value, found)` pair,
//! - [`Sequence::unique_group_by`](sequence::Sequence::unique_group_by)
//!   returns a [`DuplicateKeyError`](error::DuplicateKeyError).
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Sequence` and `Pair`
//! - `fxhash`: use `rustc-hash` for grouping and set algebra
//! - `ahash`: use `ahash` for grouping and set algebra
//! - `full`: Enable all features except the hasher selections
//!
//! ## Example
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let numbers = Sequence::from(vec![5, 3, 3, 1, 4]);
//!
//! assert_eq!(numbers.index(&3), 1);
//! assert_eq!(numbers.index(&9), NOT_FOUND);
//! assert_eq!(numbers.unique(), Sequence::from(vec![5, 3, 1, 4]));
//!
//! let mut sorted = numbers.clone();
//! sorted.sort_asc();
//! assert_eq!(sorted, Sequence::from(vec![1, 3, 3, 4, 5]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::constraints::*;
    pub use crate::error::*;
    pub use crate::hash::*;
    pub use crate::pair::*;
    pub use crate::sequence::*;
}

pub mod constraints;
pub mod error;
pub mod hash;
pub mod pair;
pub mod sequence;
