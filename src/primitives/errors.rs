//! Error types for word-count probability computations.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate: table construction, axis selection, conditional
//! division and builder configuration.
//!
//! ## Design notes
//!
//! * **Checked vs. propagated**: Only structural problems (empty corpus,
//!   mismatched shapes, bad configuration) are errors. Numeric edge cases such
//!   as a zero marginal propagate as NaN/Inf under IEEE-754 and are never
//!   reported here.
//! * **no_std**: `Display` is always implemented; `std::error::Error` only with
//!   the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not wrap I/O or parsing errors (the crate performs none).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Error type for word-count probability operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbError {
    /// The corpus or table has no entries to work with.
    EmptyInput,

    /// Generic invalid input with a description.
    InvalidInput(String),

    /// Axis selector outside `{0, 1}`.
    InvalidAxis(usize),

    /// Marginal length does not match the joint table's row count.
    MismatchedInputs {
        /// Number of rows in the joint table.
        rows: usize,
        /// Length of the supplied marginal.
        marginal_len: usize,
    },

    /// Flat buffer length does not match `rows * cols`.
    ShapeMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// A nested row has a different length from the first row.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for ProbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbError::EmptyInput => write!(f, "Input is empty"),
            ProbError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ProbError::InvalidAxis(axis) => {
                write!(f, "Invalid axis: {} (must be 0 or 1)", axis)
            }
            ProbError::MismatchedInputs { rows, marginal_len } => write!(
                f,
                "Length mismatch: joint table has {} rows, marginal has {} entries",
                rows, marginal_len
            ),
            ProbError::ShapeMismatch { rows, cols, len } => match rows.checked_mul(*cols) {
                Some(needed) => write!(
                    f,
                    "Shape mismatch: {}x{} table needs {} values, got {}",
                    rows, cols, needed, len
                ),
                None => write!(
                    f,
                    "Shape mismatch: {}x{} table size overflows usize, got {} values",
                    rows, cols, len
                ),
            },
            ProbError::RaggedRows { row, expected, got } => write!(
                f,
                "Ragged rows: row {} has {} entries, expected {}",
                row, got, expected
            ),
            ProbError::MissingParameter { parameter } => {
                write!(f, "Parameter '{}' is required but was not set", parameter)
            }
            ProbError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProbError {}
