//! Shape validation errors.

use thiserror::Error;

/// Input did not have the shape an operation requires.
///
/// Numeric degeneracy (NaN, infinities from zero norms) is never reported
/// here; it propagates through results per IEEE 754.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// More than two dimensions were supplied.
    #[error("expected at most 2 dimensions, got {ndim}")]
    Dimensionality {
        /// Number of dimensions supplied.
        ndim: usize,
    },

    /// The flat buffer does not match the product of the shape.
    #[error("buffer holds {actual} elements but shape requires {expected}")]
    LengthMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },

    /// A nested row differs in length from the first row.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// A square matrix was required.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
}

/// Result alias for shape-checked operations.
pub type Result<T> = std::result::Result<T, ShapeError>;
