//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric functions over 1-D distributions:
//! - Summation and defensive re-normalization
//! - Mean, variance and standard deviation of a count index
//!
//! These are reusable building blocks with no corpus-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sums, normalization and index casting.
pub mod reduce;

/// Mean and variance of a 1-D distribution.
pub mod moments;
