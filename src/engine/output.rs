//! Result of a word-pair analysis.
//!
//! ## Purpose
//!
//! This module defines `WordPairResult`, the assembled output of the pipeline:
//! the joint distribution, optional marginal and conditional tables, and the
//! moments of both counts.
//!
//! ## Design notes
//!
//! * **Owned**: The result owns every table; nothing borrows from the corpus.
//! * **Display**: A human-readable summary mirrors the fields in order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{self, Display};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::expectation::expectation;
use crate::primitives::table::JointTable;

/// Summary statistics for one count variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Expected count.
    pub mean: T,
    /// Variance of the count.
    pub variance: T,
    /// Standard deviation of the count.
    pub std_dev: T,
}

/// Output of [`WordPairModel::fit`](crate::api::WordPairModel::fit).
#[derive(Debug, Clone, PartialEq)]
pub struct WordPairResult<T> {
    /// The word counted as `X0`.
    pub word0: String,

    /// The word counted as `X1`.
    pub word1: String,

    /// Number of texts in the corpus.
    pub n_texts: usize,

    /// `P(X0 = m, X1 = n)`.
    pub joint: JointTable<T>,

    /// `P(X0 = m)`, when requested.
    pub marginal0: Option<Vec<T>>,

    /// `P(X1 = n)`, when requested.
    pub marginal1: Option<Vec<T>>,

    /// `P(X1 = n | X0 = m)`, when requested.
    pub conditional: Option<JointTable<T>>,

    /// Moments of `X0`.
    pub moments0: Moments<T>,

    /// Moments of `X1`.
    pub moments1: Moments<T>,

    /// `Cov(X0, X1)`.
    pub covariance: T,

    /// Pearson correlation of `X0` and `X1`.
    pub correlation: T,
}

impl<T: Float> WordPairResult<T> {
    /// `E[f(X0, X1)]` under the stored joint distribution.
    pub fn expectation<F: FnMut(T, T) -> T>(&self, f: F) -> T {
        expectation(&self.joint, f)
    }

    /// Shape of the joint table.
    pub fn shape(&self) -> (usize, usize) {
        self.joint.shape()
    }
}

impl<T: Float + Display> Display for WordPairResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.joint.shape();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Words: X0={:?}, X1={:?}", self.word0, self.word1)?;
        writeln!(f, "  Texts: {}", self.n_texts)?;
        writeln!(f, "  Table shape: {}x{}", rows, cols)?;
        writeln!(f)?;

        writeln!(f, "Moments:")?;
        writeln!(
            f,
            "  X0: mean={:.6} var={:.6} sd={:.6}",
            self.moments0.mean, self.moments0.variance, self.moments0.std_dev
        )?;
        writeln!(
            f,
            "  X1: mean={:.6} var={:.6} sd={:.6}",
            self.moments1.mean, self.moments1.variance, self.moments1.std_dev
        )?;
        writeln!(f, "  Cov(X0,X1): {:.6}", self.covariance)?;
        writeln!(f, "  Corr(X0,X1): {:.6}", self.correlation)?;
        writeln!(f)?;

        writeln!(f, "Joint P(X0=m, X1=n):")?;
        write!(f, "   m\\n")?;
        for n in 0..cols {
            write!(f, " {:>9}", n)?;
        }
        writeln!(f)?;
        for (m, row) in self.joint.iter_rows().enumerate() {
            write!(f, "  {:>3}", m)?;
            for v in row {
                write!(f, " {:>9.5}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
