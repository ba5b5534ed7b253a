//! Dense two-dimensional probability tables.
//!
//! ## Purpose
//!
//! This module provides `JointTable`, the dense row-major storage used for
//! joint count tables, joint distributions and conditional tables, together
//! with the `Axis` selector used when reducing a table to one dimension.
//!
//! ## Design notes
//!
//! * **Layout**: Row-major `Vec<T>`; entry `[m, n]` lives at `m * cols + n`.
//! * **Indexing**: The index of a cell is the literal count value. There is no
//!   offset and no overflow bucket.
//! * **Bounds**: `Index` panics out of range (like slice indexing); `get`
//!   returns `None` instead.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//! * Tables are values: every algorithm returns a fresh table.
//!
//! ## Non-goals
//!
//! * This module does not provide sparse storage.
//! * This module does not enforce normalization or non-negativity.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ProbError;

// ============================================================================
// Axis
// ============================================================================

/// Which index of a joint table to retain when marginalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Keep the row index (X0) and sum over columns.
    #[default]
    Rows,

    /// Keep the column index (X1) and sum over rows.
    Cols,
}

impl TryFrom<usize> for Axis {
    type Error = ProbError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::Rows),
            1 => Ok(Axis::Cols),
            other => Err(ProbError::InvalidAxis(other)),
        }
    }
}

// ============================================================================
// JointTable
// ============================================================================

/// Dense row-major table indexed by a pair of counts `[m, n]`.
#[derive(Debug, Clone, PartialEq)]
pub struct JointTable<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> JointTable<T> {
    /// Create a `rows x cols` table filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("{}x{} table size overflows usize", rows, cols));
        Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        }
    }

    /// Wrap a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ProbError::ShapeMismatch`] when `rows * cols` overflows or
    /// differs from `data.len()`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ProbError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(ProbError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a table from nested rows, e.g. `[[0.5, 0.0], [0.0, 0.5]]`.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, ProbError> {
        let first = rows.first().ok_or(ProbError::EmptyInput)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(ProbError::EmptyInput);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ProbError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows (possible values of X0).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (possible values of X1).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checked access to entry `[m, n]`.
    #[inline]
    pub fn get(&self, m: usize, n: usize) -> Option<T> {
        if m < self.rows && n < self.cols {
            Some(self.data[m * self.cols + n])
        } else {
            None
        }
    }

    /// Row `m` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `m >= rows`.
    #[inline]
    pub fn row(&self, m: usize) -> &[T] {
        &self.data[m * self.cols..(m + 1) * self.cols]
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics, and a zero-column table has no rows worth yielding
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Iterate over `((m, n), value)` in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i / cols, i % cols), v))
    }

    /// Underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the table and return the row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Sum of all entries.
    pub fn total(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// New table with every entry mapped through `f`.
    pub fn map<F: FnMut(T) -> T>(&self, f: F) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for JointTable<T> {
    type Output = T;

    #[inline]
    fn index(&self, (m, n): (usize, usize)) -> &T {
        assert!(
            m < self.rows && n < self.cols,
            "index ({}, {}) out of range for {}x{} table",
            m,
            n,
            self.rows,
            self.cols
        );
        &self.data[m * self.cols + n]
    }
}

impl<T> IndexMut<(usize, usize)> for JointTable<T> {
    #[inline]
    fn index_mut(&mut self, (m, n): (usize, usize)) -> &mut T {
        assert!(
            m < self.rows && n < self.cols,
            "index ({}, {}) out of range for {}x{} table",
            m,
            n,
            self.rows,
            self.cols
        );
        &mut self.data[m * self.cols + n]
    }
}
