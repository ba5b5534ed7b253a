//! Covariance and correlation of the two counts in a joint table.
//!
//! ## Purpose
//!
//! This module computes `Cov(X0, X1) = Σ P[i, j] (i - μ0)(j - μ1)` and the
//! Pearson correlation derived from it.
//!
//! ## Design notes
//!
//! * **Means**: `μ0` and `μ1` come from the row and column sums through
//!   [`mean`], so they are re-normalized like any other mean.
//! * **No re-normalization of the double sum**: The accumulation uses `P`
//!   directly. A table that does not sum to one yields a covariance scaled by
//!   its total. Pass a normalized joint table for a true covariance.
//!
//! ## Invariants
//!
//! * `covariance` of a normalized table with independent margins is zero.
//! * `correlation` lies in `[-1, 1]` for a normalized table with non-degenerate
//!   margins; it is NaN when either margin has zero variance.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::marginal::{col_sums, row_sums};
use crate::math::moments::{mean, std_dev};
use crate::math::reduce::index_value;
use crate::primitives::table::JointTable;

/// Covariance of the row and column indices under `p`.
pub fn covariance<T: Float>(p: &JointTable<T>) -> T {
    let mu0 = mean(&row_sums(p));
    let mu1 = mean(&col_sums(p));

    p.iter_indexed().fold(T::zero(), |acc, ((i, j), pij)| {
        acc + pij * (index_value::<T>(i) - mu0) * (index_value::<T>(j) - mu1)
    })
}

/// Pearson correlation, `Cov(X0, X1) / (σ0 σ1)`.
pub fn correlation<T: Float>(p: &JointTable<T>) -> T {
    let sigma0 = std_dev(&row_sums(p));
    let sigma1 = std_dev(&col_sums(p));
    covariance(p) / (sigma0 * sigma1)
}
