//! Conditional distribution `P(X1 = n | X0 = m)`.
//!
//! ## Purpose
//!
//! This module divides each row of a joint table by the matching entry of the
//! row-axis marginal.
//!
//! ## Design notes
//!
//! * **No correction**: A row whose marginal is zero produces NaN (`0 / 0`)
//!   or infinite entries. These are returned as-is.
//! * **Caller contract**: The marginal is expected to be the row sums of the
//!   same joint table. Only its length is checked.
//!
//! ## Invariants
//!
//! * Output shape equals input shape.
//! * Row `m` sums to one whenever `marginal[m] > 0` and the marginal matches
//!   the table.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ProbError;
use crate::primitives::table::JointTable;

/// Derive `P(X1 | X0)` from the joint table and the `X0` marginal.
///
/// # Errors
///
/// Returns [`ProbError::MismatchedInputs`] when `marginal.len()` differs from
/// the number of rows in `joint`.
pub fn conditional_distribution<T: Float>(
    joint: &JointTable<T>,
    marginal: &[T],
) -> Result<JointTable<T>, ProbError> {
    if marginal.len() != joint.rows() {
        return Err(ProbError::MismatchedInputs {
            rows: joint.rows(),
            marginal_len: marginal.len(),
        });
    }

    let cols = joint.cols();
    let data = joint
        .as_slice()
        .iter()
        .enumerate()
        .map(|(i, &p)| p / marginal[i / cols])
        .collect();

    JointTable::from_vec(joint.rows(), cols, data)
}
