//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the algorithms into a single analysis:
//! - Structural validation of inputs and configuration
//! - The pipeline from corpus to joint table to moments
//! - Result assembly and formatting
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution.
pub mod executor;

/// Result types.
pub mod output;

/// Input validation.
pub mod validator;
