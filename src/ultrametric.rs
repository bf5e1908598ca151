//! Ultrametric correction of square distance matrices.
//!
//! An ultrametric satisfies the strong triangle inequality
//!
//! ```text
//! d(i, j) <= max(d(i, k), d(k, j))   for all k
//! ```
//!
//! [`convert_to_ultrametric`] performs a single minimax relaxation pass:
//! every off-diagonal pair takes the tightest bound available through one
//! intermediate point. It is **not** a fixed point. Chains longer than two
//! hops are only shortened by repeated application, and repeated
//! application is not guaranteed to be a no-op.
//!
//! # Diagonal
//!
//! The result starts filled with [`ULTRAMETRIC_FILL`] and only off-diagonal
//! cells are written, so the diagonal reads `1.0`, not `0.0`.
//!
//! # NaN Handling
//!
//! | Step | Operation | NaN behavior |
//! |------|-----------|--------------|
//! | leg | `max(d(i,k), d(k,j))` | a single NaN leg is ignored |
//! | scan | minimum over `k` | any NaN leg pair poisons the scan |
//! | final | `min(minimax, d(i,j))` | NaN direct distance is ignored |
//!
//! # Parallelism
//!
//! With the `parallel` feature (default), the outer loop over `i` runs on
//! the rayon pool. Each task owns row `i`'s upper-triangle buffer; the
//! buffers are mirrored into the result afterwards, so no cell is written
//! twice and no synchronization is needed.

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::Matrix;

/// Value left on the diagonal of a corrected matrix.
pub const ULTRAMETRIC_FILL: f64 = 1.0;

/// How the outer row loop is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// Rows on the rayon pool. Falls back to [`Execution::Sequential`]
    /// when the `parallel` feature is disabled.
    #[default]
    Parallel,
    /// Rows in order on the calling thread.
    Sequential,
}

/// Fix the strong triangle inequality within a distance matrix.
///
/// For every pair `i < j`:
///
/// ```text
/// result[i, j] = result[j, i] = min(values[i, j], min_k max(values[i, k], values[k, j]))
/// ```
///
/// with `k` ranging over all indices. Diagonal entries are
/// [`ULTRAMETRIC_FILL`].
///
/// # Example
///
/// ```rust
/// use distmat::{convert_to_ultrametric, Matrix};
///
/// let d = Matrix::from_rows(&[
///     vec![0.0, 2.0, 5.0],
///     vec![2.0, 0.0, 3.0],
///     vec![5.0, 3.0, 0.0],
/// ]).unwrap();
///
/// let u = convert_to_ultrametric(&d).unwrap();
/// // 0 -> 1 -> 2 bounds d(0, 2) by max(2, 3) = 3
/// assert_eq!(u.row(0), &[1.0, 2.0, 3.0]);
/// assert_eq!(u.row(1), &[2.0, 1.0, 3.0]);
/// assert_eq!(u.row(2), &[3.0, 3.0, 1.0]);
/// ```
///
/// # Errors
///
/// [`ShapeError::NotSquare`](crate::ShapeError::NotSquare) if
/// `values.rows() != values.cols()`. A 1D input promoted with
/// [`Matrix::from_row`] is only accepted when it has a single element.
///
/// # Complexity
///
/// O(N³) time, O(N²) extra space.
pub fn convert_to_ultrametric(values: &Matrix<f64>) -> Result<Matrix<f64>> {
    convert_to_ultrametric_with(values, Execution::default())
}

/// [`convert_to_ultrametric`] with an explicit execution mode.
///
/// Both modes produce bit-identical results.
pub fn convert_to_ultrametric_with(
    values: &Matrix<f64>,
    execution: Execution,
) -> Result<Matrix<f64>> {
    let n = values.square_side()?;
    debug!("convert_to_ultrametric: {n}x{n} ({execution:?})");

    let upper = upper_triangle(values, n, execution);

    let mut result = Matrix::filled(n, n, ULTRAMETRIC_FILL);
    for (i, row) in upper.into_iter().enumerate() {
        for (offset, d) in row.into_iter().enumerate() {
            let j = i + 1 + offset;
            result[(i, j)] = d;
            result[(j, i)] = d;
        }
    }

    Ok(result)
}

/// Check the strong triangle inequality over every off-diagonal pair.
///
/// Returns `false` if the matrix is asymmetric, contains NaN off the
/// diagonal, or has some `k` with `d(i, j) > max(d(i, k), d(k, j))`.
/// Diagonal values are not required to be zero.
///
/// ```rust
/// use distmat::{is_ultrametric, Matrix};
///
/// let tree = Matrix::from_rows(&[
///     vec![0.0, 1.0, 3.0],
///     vec![1.0, 0.0, 3.0],
///     vec![3.0, 3.0, 0.0],
/// ]).unwrap();
/// assert!(is_ultrametric(&tree).unwrap());
///
/// let line = Matrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).unwrap();
/// assert!(!is_ultrametric(&line).unwrap());
/// ```
///
/// # Errors
///
/// [`ShapeError::NotSquare`](crate::ShapeError::NotSquare) for non-square input.
pub fn is_ultrametric(values: &Matrix<f64>) -> Result<bool> {
    let n = values.square_side()?;

    for i in 0..n {
        for j in (0..n).filter(|&j| j != i) {
            let d = values[(i, j)];
            // NaN fails both comparisons below.
            if d != values[(j, i)] {
                return Ok(false);
            }
            let bounded = (0..n).all(|k| d <= values[(i, k)].max(values[(k, j)]));
            if !bounded {
                trace!("is_ultrametric: violation at ({i}, {j})");
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Corrected values for `j > i`, one buffer per row `i`.
fn upper_triangle(values: &Matrix<f64>, n: usize, execution: Execution) -> Vec<Vec<f64>> {
    match execution {
        #[cfg(feature = "parallel")]
        Execution::Parallel => {
            trace!("upper_triangle: {n} rows on rayon pool");
            (0..n)
                .into_par_iter()
                .map(|i| upper_row(values, i))
                .collect()
        }
        _ => {
            trace!("upper_triangle: {n} rows sequential");
            (0..n).map(|i| upper_row(values, i)).collect()
        }
    }
}

#[inline]
fn upper_row(values: &Matrix<f64>, i: usize) -> Vec<f64> {
    ((i + 1)..values.rows())
        .map(|j| corrected_distance(values, i, j))
        .collect()
}

/// `min(values[i, j], min_k max(values[i, k], values[k, j]))`.
#[inline]
fn corrected_distance(values: &Matrix<f64>, i: usize, j: usize) -> f64 {
    let row_i = values.row(i);
    let minimax = row_i
        .iter()
        .enumerate()
        .map(|(k, &ik)| ik.max(values[(k, j)]))
        .fold(f64::INFINITY, nan_propagating_min);

    let direct = values[(i, j)];
    if direct < minimax {
        direct
    } else {
        minimax
    }
}

#[inline]
fn nan_propagating_min(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else if x < acc {
        x
    } else {
        acc
    }
}
