//! Error types for sequence operations.
//!
//! Only one operation in this crate can fail:
//! [`Sequence::unique_group_by`](crate::sequence::Sequence::unique_group_by),
//! which refuses to silently drop an element when two of them map to the same
//! key. Every other absent or out-of-range condition is a no-op or a
//! not-found signal.

use std::fmt;

use thiserror::Error;

/// Two elements produced the same key in an injective grouping.
///
/// # Examples
///
/// ```rust
/// use seqkit::error::DuplicateKeyError;
///
/// let error = DuplicateKeyError {
///     key: 1,
///     first_index: 0,
///     duplicate_index: 2,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "duplicate key 1 at index 2 (first seen at index 0)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate key {key:?} at index {duplicate_index} (first seen at index {first_index})")]
pub struct DuplicateKeyError<K: fmt::Debug> {
    /// The key shared by both elements.
    pub key: K,
    /// Index of the element that first produced the key.
    pub first_index: usize,
    /// Index of the element that produced the key again.
    pub duplicate_index: usize,
}
