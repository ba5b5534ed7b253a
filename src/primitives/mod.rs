//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by every other layer:
//! - The `ProbError` error type
//! - The dense `JointTable` and the `Axis` selector
//! - Exact-match token counting
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Dense 2-D tables and axis selection.
pub mod table;

/// Token counting.
pub mod tokens;
