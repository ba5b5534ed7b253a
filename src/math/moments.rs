//! Moments of a one-dimensional count distribution.
//!
//! ## Purpose
//!
//! This module computes the mean, variance and standard deviation of a
//! distribution `P[i] = P(X = i)` whose support is the index set `0..len`.
//!
//! ## Design notes
//!
//! * **Defensive re-normalization**: The input does not need to sum to one.
//!   Each estimator divides by the input's own sum first, so raw counts and
//!   slightly unnormalized arrays give the same answer as their normalized form.
//! * **Propagation**: An all-zero input has sum zero and every moment is NaN.
//!   An empty input has no terms to accumulate; mean and variance are zero.
//!
//! ## Invariants
//!
//! * `variance(P) >= 0` for any non-negative `P` with a positive sum.
//! * A point mass at `k` has mean `k` and variance `0`.
//!
//! ## Non-goals
//!
//! * This module does not compute higher moments (skewness, kurtosis).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::reduce::{index_value, normalized};

/// Mean of the index under `p`: `Σ i · p[i] / Σ p`.
pub fn mean<T: Float>(p: &[T]) -> T {
    normalized(p)
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, &pi)| acc + index_value::<T>(i) * pi)
}

/// Variance of the index under `p`: `Σ (i - μ)² · p[i] / Σ p`.
pub fn variance<T: Float>(p: &[T]) -> T {
    let mu = mean(p);
    normalized(p).iter().enumerate().fold(T::zero(), |acc, (i, &pi)| {
        let d = index_value::<T>(i) - mu;
        acc + d * d * pi
    })
}

/// Standard deviation, `sqrt(variance(p))`.
#[inline]
pub fn std_dev<T: Float>(p: &[T]) -> T {
    variance(p).sqrt()
}
