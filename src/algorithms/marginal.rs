//! Marginal distributions of a joint table.
//!
//! Reduces `P(X0, X1)` to `P(X0)` (sum over columns) or `P(X1)` (sum over
//! rows). The output length equals the retained dimension of the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::reduce::sum;
use crate::primitives::table::{Axis, JointTable};

/// Marginal distribution retaining `axis`.
///
/// * `Axis::Rows`: `out[m] = Σ_n P[m, n]`
/// * `Axis::Cols`: `out[n] = Σ_m P[m, n]`
pub fn marginal_distribution<T: Float>(joint: &JointTable<T>, axis: Axis) -> Vec<T> {
    match axis {
        Axis::Rows => row_sums(joint),
        Axis::Cols => col_sums(joint),
    }
}

/// Sum of each row.
pub fn row_sums<T: Float>(joint: &JointTable<T>) -> Vec<T> {
    (0..joint.rows()).map(|m| sum(joint.row(m))).collect()
}

/// Sum of each column.
pub fn col_sums<T: Float>(joint: &JointTable<T>) -> Vec<T> {
    let mut out = vec![T::zero(); joint.cols()];
    for row in joint.iter_rows() {
        for (acc, &v) in out.iter_mut().zip(row) {
            *acc = *acc + v;
        }
    }
    out
}
