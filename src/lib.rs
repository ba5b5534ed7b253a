//! # wordprob — Word-Count Probability Toolkit for Rust
//!
//! Discrete probability statistics over word-occurrence counts in a corpus:
//! joint, marginal and conditional distributions, moments, covariance and
//! expectations of arbitrary functions.
//!
//! ## What does it compute?
//!
//! Pick two words, `word0` and `word1`. For every text in a corpus, let `X0` be
//! the number of times `word0` occurs and `X1` the number of times `word1`
//! occurs. Treating the texts as equally likely samples gives a joint
//! probability mass function over pairs of counts:
//!
//! ```text
//! P[m, n] = P(X0 = m, X1 = n) = (# texts with m × word0 and n × word1) / (# texts)
//! ```
//!
//! Everything else is a reduction of that table:
//!
//! | Quantity                 | Function                     | Definition                                   |
//! |--------------------------|------------------------------|----------------------------------------------|
//! | Joint distribution       | `joint_distribution`         | `P[m, n]`                                    |
//! | Marginal                 | `marginal_distribution`      | `Σ_n P[m, n]` or `Σ_m P[m, n]`               |
//! | Conditional              | `conditional_distribution`   | `P[m, n] / P(X0 = m)`                        |
//! | Mean                     | `mean`                       | `Σ i · P[i]`                                 |
//! | Variance                 | `variance`                   | `Σ (i - μ)² · P[i]`                          |
//! | Covariance               | `covariance`                 | `Σ P[i, j] (i - μ0)(j - μ1)`                 |
//! | Expectation              | `expectation`                | `Σ f(i, j) · P[i, j]`                        |
//!
//! Indices are literal count values: row `m` is "word0 occurs exactly `m`
//! times". The table is `(max0 + 1) x (max1 + 1)`, where `max0`/`max1` are the
//! largest counts seen in any text.
//!
//! ## Quick Start
//!
//! ```rust
//! use wordprob_rs::prelude::*;
//!
//! let texts = vec![
//!     vec!["a", "b", "a"],
//!     vec!["a"],
//!     vec!["b", "b"],
//! ];
//!
//! let model = WordPair::new()
//!     .first_word("a")
//!     .second_word("b")
//!     .return_conditional()
//!     .build()?;
//!
//! let result: WordPairResult<f64> = model.fit(&texts)?;
//!
//! assert_eq!(result.shape(), (3, 3));
//! assert!((result.joint[(2, 1)] - 1.0 / 3.0).abs() < 1e-12);
//! println!("{}", result);
//! # Result::<(), ProbError>::Ok(())
//! ```
//!
//! ## Free Functions
//!
//! Each step is also available on its own and composes by passing one
//! function's output to the next:
//!
//! ```rust
//! use wordprob_rs::prelude::*;
//!
//! let texts = vec![vec!["a", "b", "a"], vec!["a"], vec!["b", "b"]];
//!
//! let joint: JointTable<f64> = joint_distribution(&texts, "a", "b")?;
//! let p0 = marginal_distribution(&joint, Axis::Rows);
//! let cond = conditional_distribution(&joint, &p0)?;
//!
//! let mu0 = mean(&p0);
//! let cov = covariance(&joint);
//! let e_sum = expectation(&joint, |x0, x1| x0 + x1);
//!
//! assert!((mu0 - 1.0).abs() < 1e-12);
//! assert!((e_sum - 2.0).abs() < 1e-12);
//! assert!((cond[(2, 1)] - 1.0).abs() < 1e-12);
//! # let _ = cov;
//! # Result::<(), ProbError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Structural problems are reported as [`ProbError`](prelude::ProbError):
//!
//! - **`EmptyInput`**: the corpus has no texts (normalization would divide by zero).
//! - **`MismatchedInputs`**: a marginal whose length differs from the table's row count.
//! - **`InvalidAxis`**: an axis other than 0 or 1 passed to `Axis::try_from`.
//! - **`MissingParameter` / `DuplicateParameter` / `InvalidInput`**: builder misconfiguration.
//!
//! Numeric edge cases are **not** errors. They follow IEEE-754:
//!
//! - A conditional row whose marginal is zero is NaN.
//! - The mean or variance of an all-zero distribution is NaN.
//! - The correlation of a table with a constant margin is NaN.
//!
//! Indexing a table out of range with `table[(m, n)]` panics; use
//! `table.get(m, n)` for a checked `Option`.
//!
//! ## Normalization Conventions
//!
//! `mean`, `variance` and `std_dev` divide their input by its own sum first,
//! so raw counts work directly. `covariance` computes its means the same way
//! but accumulates the double sum over the table as given: a table that does
//! not sum to one yields a proportionally scaled covariance.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! wordprob-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Table construction and pipeline stages emit `debug!` records through the
//! `log` facade. Install any `log` backend to see them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the dense `JointTable`, the `Axis` selector and
// exact-match token counting.
mod primitives;

// Layer 2: Math - pure numeric reductions.
//
// Contains summation, defensive normalization and the moment estimators.
mod math;

// Layer 3: Algorithms - the probability toolkit.
//
// Contains joint, marginal and conditional distributions, covariance,
// correlation and expectations.
mod algorithms;

// Layer 4: Engine - orchestration.
//
// Contains validation, the analysis pipeline and result assembly.
mod engine;

// High-level fluent API.
//
// Provides the `WordPairBuilder` for configuring and running an analysis.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types and functions:
///
/// ```
/// use wordprob_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::conditional::conditional_distribution;
    pub use crate::algorithms::covariance::{correlation, covariance};
    pub use crate::algorithms::expectation::{expectation, expectation_grid};
    pub use crate::algorithms::joint::{joint_counts, joint_distribution};
    pub use crate::algorithms::marginal::marginal_distribution;
    pub use crate::api::{
        Axis, JointTable, Moments, ProbError, WordPairBuilder as WordPair, WordPairModel,
        WordPairResult,
    };
    pub use crate::math::moments::{mean, std_dev, variance};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal probability algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
