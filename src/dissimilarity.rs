//! Rowwise dissimilarity: how many columns differ between each pair of rows.

use log::debug;

use crate::matrix::Matrix;
use crate::metric::{pairwise_rows, Mismatch};

/// Compare every row with every other row and count differing columns.
///
/// `result[i, j]` is the number of columns `c` with
/// `values[i, c] != values[j, c]`. The result is R×R, symmetric, with a zero
/// diagonal (except for rows containing NaN, which never equals itself).
///
/// Only equality is used, so any `PartialEq` element works.
///
/// # Example
///
/// ```rust
/// use distmat::{rowwise_dissimilarity, Matrix};
///
/// let values = Matrix::from_rows(&[
///     vec![1, 2, 3],
///     vec![1, 3, 1],
///     vec![2, 2, 2],
/// ]).unwrap();
///
/// let d = rowwise_dissimilarity(&values);
/// assert_eq!(d.row(0), &[0, 2, 2]);
/// assert_eq!(d.row(1), &[2, 0, 3]);
/// assert_eq!(d.row(2), &[2, 3, 0]);
/// ```
///
/// # Complexity
///
/// O(R² · C).
#[must_use]
pub fn rowwise_dissimilarity<T: PartialEq>(values: &Matrix<T>) -> Matrix<usize> {
    debug!(
        "rowwise_dissimilarity: {}x{} -> {}x{}",
        values.rows(),
        values.cols(),
        values.rows(),
        values.rows()
    );
    pairwise_rows(values, &Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let values = Matrix::from_row(vec![4, 5, 6]);
        let d = rowwise_dissimilarity(&values);
        assert_eq!(d.shape(), (1, 1));
        assert_eq!(d[(0, 0)], 0);
    }

    #[test]
    fn test_zero_rows() {
        let values: Matrix<i32> = Matrix::from_shape_vec(0, 3, Vec::new()).unwrap();
        let d = rowwise_dissimilarity(&values);
        assert_eq!(d.shape(), (0, 0));
    }

    #[test]
    fn test_zero_columns() {
        // Rows with nothing to compare never differ.
        let values: Matrix<i32> = Matrix::from_shape_vec(3, 0, Vec::new()).unwrap();
        let d = rowwise_dissimilarity(&values);
        assert_eq!(d.as_slice(), &[0; 9]);
    }

    #[test]
    fn test_string_elements() {
        let values = Matrix::from_rows(&[
            vec!["a".to_string(), "b".to_string()],
            vec!["a".to_string(), "c".to_string()],
        ])
        .unwrap();
        let d = rowwise_dissimilarity(&values);
        assert_eq!(d.as_slice(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_identical_rows() {
        let values = Matrix::from_rows(&[vec![1.5, 2.5], vec![1.5, 2.5]]).unwrap();
        let d = rowwise_dissimilarity(&values);
        assert_eq!(d.as_slice(), &[0, 0, 0, 0]);
    }
}
