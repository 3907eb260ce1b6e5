//! Type bounds consumed by the ordering and numeric operations.
//!
//! - [`Ordered`]: a total order over integers, floats, characters and strings
//! - [`Numeric`]: types with an additive identity that can be summed
//!
//! Floats are ordered with [`f64::total_cmp`], so `NaN` sorts after every
//! other value instead of breaking the sort.
//!
//! # Examples
//!
//! ```rust
//! use seqkit::constraints::{Numeric, Ordered};
//! use std::cmp::Ordering;
//!
//! assert_eq!(1.5_f64.compare(&f64::NAN), Ordering::Less);
//! assert_eq!("a".compare(&"b"), Ordering::Less);
//! assert_eq!(i32::zero().plus(3), 3);
//! ```

use std::cmp::Ordering;

/// A type whose values can be compared under a total order.
///
/// Unlike [`Ord`], this is implemented for `f32` and `f64`.
pub trait Ordered {
    /// Compares `self` with `other`.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns `true` if `self` orders strictly before `other`.
    #[inline]
    fn is_less(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }
}

/// A type with an additive identity and addition.
pub trait Numeric: Copy {
    /// The additive identity.
    fn zero() -> Self;

    /// Adds `other` to `self`. Integer overflow wraps.
    #[must_use]
    fn plus(self, other: Self) -> Self;
}

macro_rules! impl_ordered_via_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Ordered for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_ordered_via_total_cmp {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Ordered for $ty {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_ordered_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, String
);
impl_ordered_via_total_cmp!(f32, f64);

impl_numeric_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

impl Ordered for str {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}
