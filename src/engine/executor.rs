//! Execution engine for word-pair analysis.
//!
//! ## Purpose
//!
//! This module chains the algorithms into one pass over a corpus: joint
//! distribution, marginals, optional conditional table, moments, covariance
//! and correlation.
//!
//! ## Design notes
//!
//! * **Data flow**: Each stage consumes the previous stage's output; no stage
//!   mutates an earlier result.
//! * **Error surface**: Only the joint build and the conditional division can
//!   fail. Moments never fail; degenerate inputs surface as NaN.
//!
//! ## Key concepts
//!
//! * **WordPairConfig**: The resolved configuration produced by the builder.
//! * **WordPairExecutor**: Stateless runner over a config.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::conditional::conditional_distribution;
use crate::algorithms::covariance::{correlation, covariance};
use crate::algorithms::joint::joint_distribution;
use crate::algorithms::marginal::marginal_distribution;
use crate::engine::output::{Moments, WordPairResult};
use crate::math::moments::{mean, std_dev, variance};
use crate::primitives::errors::ProbError;
use crate::primitives::table::Axis;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPairConfig {
    /// Word counted as `X0`.
    pub word0: String,

    /// Word counted as `X1`.
    pub word1: String,

    /// Include `P(X1 | X0)` in the result.
    pub return_conditional: bool,

    /// Include both marginals in the result.
    pub return_marginals: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the analysis pipeline for a [`WordPairConfig`].
pub struct WordPairExecutor;

impl WordPairExecutor {
    /// Analyse `texts` under `config`.
    pub fn run<T, D, W>(config: &WordPairConfig, texts: &[D]) -> Result<WordPairResult<T>, ProbError>
    where
        T: Float,
        D: AsRef<[W]>,
        W: AsRef<str>,
    {
        let joint = joint_distribution::<T, D, W>(texts, &config.word0, &config.word1)?;
        debug!("joint distribution built: shape {:?}", joint.shape());

        let marginal0 = marginal_distribution(&joint, Axis::Rows);
        let marginal1 = marginal_distribution(&joint, Axis::Cols);

        let conditional = if config.return_conditional {
            debug!("deriving conditional P(X1|X0)");
            Some(conditional_distribution(&joint, &marginal0)?)
        } else {
            None
        };

        let moments0 = Self::moments(&marginal0);
        let moments1 = Self::moments(&marginal1);
        let covariance = covariance(&joint);
        let correlation = correlation(&joint);
        debug!("moments computed for {} texts", texts.len());

        let (marginal0, marginal1) = if config.return_marginals {
            (Some(marginal0), Some(marginal1))
        } else {
            (None, None)
        };

        Ok(WordPairResult {
            word0: config.word0.clone(),
            word1: config.word1.clone(),
            n_texts: texts.len(),
            joint,
            marginal0,
            marginal1,
            conditional,
            moments0,
            moments1,
            covariance,
            correlation,
        })
    }

    fn moments<T: Float>(p: &[T]) -> Moments<T> {
        Moments {
            mean: mean(p),
            variance: variance(p),
            std_dev: std_dev(p),
        }
    }
}
