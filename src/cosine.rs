//! Cosine similarity matrix over the columns of a matrix.
//!
//! # Layout
//!
//! A row-major R×C matrix already stores its C column vectors in columnar
//! (dimension-major) order: row `r` holds dimension `r` of every column
//! vector. Norms and the Gram matrix therefore accumulate row by row over
//! contiguous memory:
//!
//! ```text
//! for each row r:
//!     for each column i:
//!         norm_sq[i] += v[r][i]^2
//! ```
//!
//! # Degenerate columns
//!
//! No epsilon guard is applied. A zero-norm column normalizes to `0/0 = NaN`
//! and poisons its whole row and column of the result. Callers that want a
//! `0.0` fallback must filter such columns first.

use log::debug;

use crate::matrix::Matrix;

/// L2 norm of every column: `sqrt(Σ_r values[r, c]²)`.
///
/// ```rust
/// use distmat::{cosine::column_norms, Matrix};
///
/// let m = Matrix::from_rows(&[vec![3.0, 0.0], vec![4.0, 2.0]]).unwrap();
/// assert_eq!(column_norms(&m), vec![5.0, 2.0]);
/// ```
#[must_use]
pub fn column_norms(values: &Matrix<f64>) -> Vec<f64> {
    let mut norms = vec![0.0f64; values.cols()];

    for row in values.iter_rows() {
        for (norm, &v) in norms.iter_mut().zip(row.iter()) {
            *norm += v * v;
        }
    }

    for norm in &mut norms {
        *norm = norm.sqrt();
    }

    norms
}

/// Pairwise cosine similarity between the **columns** of `values`.
///
/// Despite the name, columns (not rows) are compared: each column is divided
/// by its L2 norm and the C×C Gram matrix of the normalized columns is
/// returned, `result[i, j] = cos(column_i, column_j)`.
///
/// - Diagonal entries are `1.0` (up to rounding) for nonzero columns.
/// - The result is exactly symmetric.
/// - Zero-norm columns produce NaN (see module docs).
/// - Zero rows yield a C×C matrix of zeros.
///
/// # Example
///
/// ```rust
/// use distmat::{rowwise_cosine_similarity, Matrix};
///
/// let values = Matrix::from_rows(&[
///     vec![1.0, 0.0, 1.0],
///     vec![0.0, 1.0, 1.0],
/// ]).unwrap();
///
/// let s = rowwise_cosine_similarity(&values);
/// assert_eq!(s.shape(), (3, 3));
/// assert!(s[(0, 1)].abs() < 1e-12);                             // orthogonal
/// assert!((s[(0, 2)] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12); // 45 degrees
/// assert!((s[(2, 2)] - 1.0).abs() < 1e-12);
/// ```
///
/// # Complexity
///
/// O(R · C²).
#[must_use]
pub fn rowwise_cosine_similarity(values: &Matrix<f64>) -> Matrix<f64> {
    let (rows, cols) = values.shape();
    let norms = column_norms(values);

    let zero_norm = norms.iter().filter(|&&n| n == 0.0).count();
    debug!(
        "rowwise_cosine_similarity: {}x{} -> {}x{} ({} zero-norm columns)",
        rows, cols, cols, cols, zero_norm
    );

    let normalized: Vec<f64> = values
        .as_slice()
        .chunks_exact(cols.max(1))
        .flat_map(|row| row.iter().zip(norms.iter()).map(|(&v, &n)| v / n))
        .collect();

    // Upper triangle of normalizedᵀ · normalized, accumulated row by row.
    let mut gram = vec![0.0f64; cols * cols];
    for row in normalized.chunks_exact(cols.max(1)) {
        for (i, &a) in row.iter().enumerate() {
            let out = &mut gram[i * cols..(i + 1) * cols];
            for (acc, &b) in out[i..].iter_mut().zip(row[i..].iter()) {
                *acc += a * b;
            }
        }
    }

    for i in 0..cols {
        for j in (i + 1)..cols {
            gram[j * cols + i] = gram[i * cols + j];
        }
    }

    Matrix::from_raw(cols, cols, gram)
}
