//! High-level API for word-pair analysis.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. A fluent builder collects
//! the two target words and the output options, validates them once in
//! `.build()`, and yields a reusable model whose `.fit(&texts)` runs the whole
//! pipeline.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every optional setting.
//! * **Validated**: Configuration errors are reported by `.build()`, not by `.fit()`.
//! * **Type-Safe**: `fit` is generic over `Float`, so the same model can
//!   produce `f32` or `f64` results.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WordPairBuilder`] via `WordPair::new()`.
//! 2. Set `.first_word()` and `.second_word()`, plus any options.
//! 3. Call `.build()` to obtain a [`WordPairModel`], then `.fit(&texts)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::WordPairExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::WordPairConfig;
pub use crate::engine::output::{Moments, WordPairResult};
pub use crate::primitives::errors::ProbError;
pub use crate::primitives::table::{Axis, JointTable};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a word-pair analysis.
#[derive(Debug, Clone, Default)]
pub struct WordPairBuilder {
    /// Word counted as `X0`.
    pub word0: Option<String>,

    /// Word counted as `X1`.
    pub word1: Option<String>,

    /// Include `P(X1 | X0)` in the result (default: false).
    pub return_conditional: Option<bool>,

    /// Include both marginals in the result (default: true).
    pub return_marginals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl WordPairBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word counted as `X0` (row index).
    pub fn first_word(mut self, word: &str) -> Self {
        if self.word0.is_some() {
            self.duplicate_param = Some("first_word");
        }
        self.word0 = Some(word.to_string());
        self
    }

    /// Set the word counted as `X1` (column index).
    pub fn second_word(mut self, word: &str) -> Self {
        if self.word1.is_some() {
            self.duplicate_param = Some("second_word");
        }
        self.word1 = Some(word.to_string());
        self
    }

    /// Include the conditional table `P(X1 | X0)` in the result.
    pub fn return_conditional(mut self) -> Self {
        if self.return_conditional.is_some() {
            self.duplicate_param = Some("return_conditional");
        }
        self.return_conditional = Some(true);
        self
    }

    /// Choose whether the marginals are kept in the result.
    pub fn return_marginals(mut self, keep: bool) -> Self {
        if self.return_marginals.is_some() {
            self.duplicate_param = Some("return_marginals");
        }
        self.return_marginals = Some(keep);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<WordPairModel, ProbError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let word0 = self.word0.ok_or(ProbError::MissingParameter {
            parameter: "first_word",
        })?;
        let word1 = self.word1.ok_or(ProbError::MissingParameter {
            parameter: "second_word",
        })?;
        Validator::validate_word(&word0, "first_word")?;
        Validator::validate_word(&word1, "second_word")?;

        Ok(WordPairModel {
            config: WordPairConfig {
                word0,
                word1,
                return_conditional: self.return_conditional.unwrap_or(false),
                return_marginals: self.return_marginals.unwrap_or(true),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated, reusable word-pair analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPairModel {
    config: WordPairConfig,
}

impl WordPairModel {
    /// The resolved configuration.
    pub fn config(&self) -> &WordPairConfig {
        &self.config
    }

    /// Run the analysis over `texts`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::EmptyInput`] when `texts` is empty.
    pub fn fit<T, D, W>(&self, texts: &[D]) -> Result<WordPairResult<T>, ProbError>
    where
        T: Float,
        D: AsRef<[W]>,
        W: AsRef<str>,
    {
        WordPairExecutor::run::<T, D, W>(&self.config, texts)
    }
}
