//! Input validation for word-pair configuration and data.
//!
//! ## Purpose
//!
//! This module checks the builder's structural preconditions: non-empty
//! target words and no parameter configured twice. The empty-corpus check
//! belongs to the joint-distribution build.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Structure only**: Numeric preconditions (non-negative entries, unit
//!   sum, non-zero marginals) are deliberately not checked; their violations
//!   propagate through IEEE arithmetic.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::ProbError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for word-pair inputs.
pub struct Validator;

impl Validator {
    /// Validate a target word.
    pub fn validate_word(word: &str, name: &str) -> Result<(), ProbError> {
        if word.is_empty() {
            return Err(ProbError::InvalidInput(format!("{} must not be empty", name)));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), ProbError> {
        match duplicate {
            Some(parameter) => Err(ProbError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
