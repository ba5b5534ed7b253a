//! Elementwise reductions over dense distributions.
//!
//! ## Purpose
//!
//! This module provides the small building blocks shared by the moment,
//! covariance and expectation code: summation, defensive re-normalization and
//! the cast from a count index to the float type.
//!
//! ## Design notes
//!
//! * **IEEE semantics**: Normalizing an all-zero input divides by zero and
//!   yields NaN entries. Nothing is clamped or replaced.
//! * **Allocation**: `normalized` returns a new vector; the input is never
//!   modified.
//!
//! ## Non-goals
//!
//! * This module does not use compensated (Kahan) summation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Convert a count index to `T`.
///
/// Every `usize` is representable (possibly rounded) in `f32`/`f64`, so the
/// NaN fallback is only reachable for exotic `Float` implementations.
#[inline]
pub fn index_value<T: Float>(i: usize) -> T {
    T::from(i).unwrap_or_else(T::nan)
}

/// Plain left-to-right sum.
#[inline]
pub fn sum<T: Float>(vals: &[T]) -> T {
    vals.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Divide every entry by the sum of all entries.
pub fn normalized<T: Float>(vals: &[T]) -> Vec<T> {
    let total = sum(vals);
    vals.iter().map(|&v| v / total).collect()
}
