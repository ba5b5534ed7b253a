//! Joint distribution of two word counts across a corpus.
//!
//! ## Purpose
//!
//! This module scans a corpus and builds the table
//! `P[m, n] = P(X0 = m, X1 = n)`, where `X0` is the number of times `word0`
//! occurs in a text and `X1` the number of times `word1` occurs in the same
//! text.
//!
//! ## Design notes
//!
//! * **Two-pass build**: The first pass counts both words in every text and
//!   records the maxima; the second allocates a `(max0 + 1) x (max1 + 1)` table
//!   and increments one cell per text.
//! * **Normalization**: Raw frequencies are divided by the number of texts.
//! * **Empty corpus**: Reported as `ProbError::EmptyInput` rather than
//!   producing a table of NaN.
//!
//! ## Invariants
//!
//! * The normalized table sums to one (up to rounding) and is non-negative.
//! * The table shape is exactly `(max0 + 1, max1 + 1)`.
//!
//! ## Non-goals
//!
//! * This module does not tokenize raw strings.
//! * This module does not cache counts between calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::math::reduce::index_value;
use crate::primitives::errors::ProbError;
use crate::primitives::table::JointTable;
use crate::primitives::tokens::count_pair;

// ============================================================================
// Count Table
// ============================================================================

/// Raw frequency table: `[m, n]` is the number of texts containing `word0`
/// exactly `m` times and `word1` exactly `n` times.
pub fn joint_counts<T, D, W>(texts: &[D], word0: &str, word1: &str) -> Result<JointTable<T>, ProbError>
where
    T: Float,
    D: AsRef<[W]>,
    W: AsRef<str>,
{
    if texts.is_empty() {
        return Err(ProbError::EmptyInput);
    }

    // Pass 1: per-text counts and table bounds
    let counts: Vec<(usize, usize)> = texts
        .iter()
        .map(|text| count_pair(text.as_ref(), word0, word1))
        .collect();
    let (max0, max1) = counts
        .iter()
        .fold((0, 0), |(a, b), &(c0, c1)| (a.max(c0), b.max(c1)));

    // Pass 2: populate
    let mut table = JointTable::zeros(max0 + 1, max1 + 1);
    for &(c0, c1) in &counts {
        table[(c0, c1)] = table[(c0, c1)] + T::one();
    }

    debug!(
        "joint counts for ({:?}, {:?}): {} texts, shape {}x{}",
        word0,
        word1,
        texts.len(),
        max0 + 1,
        max1 + 1
    );

    Ok(table)
}

// ============================================================================
// Joint Distribution
// ============================================================================

/// Normalized joint distribution `P(X0 = m, X1 = n)`.
///
/// # Errors
///
/// Returns [`ProbError::EmptyInput`] when `texts` is empty.
pub fn joint_distribution<T, D, W>(
    texts: &[D],
    word0: &str,
    word1: &str,
) -> Result<JointTable<T>, ProbError>
where
    T: Float,
    D: AsRef<[W]>,
    W: AsRef<str>,
{
    let counts = joint_counts::<T, D, W>(texts, word0, word1)?;
    let n_texts = index_value::<T>(texts.len());
    Ok(counts.map(|c| c / n_texts))
}
