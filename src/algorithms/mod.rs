//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the probability toolkit itself:
//! - Joint count tables and distributions from a corpus
//! - Marginal and conditional distributions
//! - Covariance, correlation and expectations over a joint table
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Joint count tables.
pub mod joint;

/// Marginalization.
pub mod marginal;

/// Conditional distributions.
pub mod conditional;

/// Covariance and correlation.
pub mod covariance;

/// Expectations of functions of both counts.
pub mod expectation;
