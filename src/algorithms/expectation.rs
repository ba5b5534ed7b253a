//! Expectation of an arbitrary function of both counts.
//!
//! ## Purpose
//!
//! This module evaluates `E[f(X0, X1)] = Σ f(i, j) · P[i, j]` for a
//! caller-supplied scalar function `f`.
//!
//! ## Design notes
//!
//! * **Eager grid**: `f` is evaluated at every `(i, j)` of the outer-product
//!   index grid `0..rows x 0..cols`, so it must not panic anywhere on the grid.
//! * **Zero mass**: Cells with `P[i, j] == 0` contribute exactly zero, even if
//!   `f` returned NaN or an infinity there. `f` only has to be finite where the
//!   table has mass.
//!
//! ## Non-goals
//!
//! * This module does not integrate continuous functions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::reduce::index_value;
use crate::primitives::table::JointTable;

/// Table of `f(i, j)` over the full index grid of `p`.
pub fn expectation_grid<T, F>(p: &JointTable<T>, mut f: F) -> JointTable<T>
where
    T: Float,
    F: FnMut(T, T) -> T,
{
    let mut grid = JointTable::zeros(p.rows(), p.cols());
    for i in 0..p.rows() {
        let x0 = index_value::<T>(i);
        for j in 0..p.cols() {
            grid[(i, j)] = f(x0, index_value::<T>(j));
        }
    }
    grid
}

/// Expected value of `f(X0, X1)` under `p`.
pub fn expectation<T, F>(p: &JointTable<T>, f: F) -> T
where
    T: Float,
    F: FnMut(T, T) -> T,
{
    let grid = expectation_grid(p, f);
    p.as_slice()
        .iter()
        .zip(grid.as_slice())
        .filter(|&(&pij, _)| pij != T::zero())
        .fold(T::zero(), |acc, (&pij, &fij)| acc + fij * pij)
}
