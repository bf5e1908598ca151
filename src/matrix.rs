//! Dense row-major matrix container.
//!
//! # Memory Layout
//!
//! For a matrix with R rows and C columns:
//! ```text
//! data[r * C + c] = row r, column c
//! ```
//!
//! Rows are contiguous, so row-pair comparisons walk memory sequentially.
//! Column access ([`Matrix::column`]) gathers with stride C and allocates.
//!
//! # Dimensionality
//!
//! Callers holding dynamically shaped data (a shape slice plus a flat
//! buffer) go through [`Matrix::from_shape`], which promotes scalars and
//! 1D vectors to 2D the same way `atleast_2d` does in array libraries:
//!
//! | Input shape | Matrix shape |
//! |-------------|--------------|
//! | `[]` | 1×1 |
//! | `[n]` | 1×n |
//! | `[r, c]` | r×c |
//! | `[a, b, c, ..]` | [`ShapeError::Dimensionality`] |

use std::ops::{Index, IndexMut};

use crate::error::{Result, ShapeError};

/// Owned rectangular matrix stored in row-major order.
///
/// # Example
///
/// ```rust
/// use distmat::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 0)], 4);
/// assert_eq!(m.row(0), &[1, 2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    /// Row-major data: data[r * cols + c]
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Wrap a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// [`ShapeError::LengthMismatch`] if `data.len() != rows * cols`.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Wrap a buffer whose length is already known to be `rows * cols`.
    #[inline]
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols, "from_raw: length mismatch");
        Self { data, rows, cols }
    }

    /// Promote a 1D vector to a single-row matrix.
    pub fn from_row(row: Vec<T>) -> Self {
        let cols = row.len();
        Self {
            data: row,
            rows: 1,
            cols,
        }
    }

    /// Build from an arbitrary shape, promoting to at least two dimensions.
    ///
    /// ```rust
    /// use distmat::{Matrix, ShapeError};
    ///
    /// let scalar = Matrix::from_shape(&[], vec![7.0]).unwrap();
    /// assert_eq!(scalar.shape(), (1, 1));
    ///
    /// let row = Matrix::from_shape(&[3], vec![1, 2, 3]).unwrap();
    /// assert_eq!(row.shape(), (1, 3));
    ///
    /// let cube = Matrix::from_shape(&[2, 2, 2], vec![0u8; 8]);
    /// assert_eq!(cube, Err(ShapeError::Dimensionality { ndim: 3 }));
    /// ```
    ///
    /// # Errors
    ///
    /// [`ShapeError::Dimensionality`] for more than two dimensions, or
    /// [`ShapeError::LengthMismatch`] if the buffer does not fit the shape.
    pub fn from_shape(shape: &[usize], data: Vec<T>) -> Result<Self> {
        match *shape {
            [] => Self::from_shape_vec(1, 1, data),
            [n] => Self::from_shape_vec(1, n, data),
            [rows, cols] => Self::from_shape_vec(rows, cols, data),
            _ => Err(ShapeError::Dimensionality { ndim: shape.len() }),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when `rows == cols`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Contiguous slice for a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Flat row-major view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume into the flat row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` to every element, preserving shape.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Validate squareness, returning the side length.
    pub(crate) fn square_side(&self) -> Result<usize> {
        if self.is_square() {
            Ok(self.rows)
        } else {
            Err(ShapeError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Create from nested row vectors.
    ///
    /// An empty slice yields a 0×0 matrix.
    ///
    /// # Errors
    ///
    /// [`ShapeError::RaggedRows`] if any row differs in length from row 0.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self {
                data: Vec::new(),
                rows: 0,
                cols: 0,
            });
        };

        let cols = first.len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::RaggedRows {
                    row: r,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Extract a single column (allocates).
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.cols()`.
    pub fn column(&self, col: usize) -> Vec<T> {
        assert!(col < self.cols, "column {col} out of bounds ({} cols)", self.cols);
        (0..self.rows).map(|r| self[(r, col)].clone()).collect()
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c].clone());
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T> From<Vec<T>> for Matrix<T> {
    /// Same as [`Matrix::from_row`].
    fn from(row: Vec<T>) -> Self {
        Self::from_row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_layout() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_rows_empty() {
        let m: Matrix<f64> = Matrix::from_rows(&[]).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert!(m.is_square());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_shape_vec_length_mismatch() {
        let err = Matrix::from_shape_vec(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_shape_vec_zero_rows_keeps_cols() {
        let m: Matrix<i32> = Matrix::from_shape_vec(0, 4, Vec::new()).unwrap();
        assert_eq!(m.shape(), (0, 4));
        assert!(m.is_empty());
    }

    #[test]
    fn test_from_shape_promotion() {
        assert_eq!(Matrix::from_shape(&[], vec![5]).unwrap().shape(), (1, 1));
        assert_eq!(Matrix::from_shape(&[4], vec![0; 4]).unwrap().shape(), (1, 4));
        assert_eq!(Matrix::from_shape(&[2, 3], vec![0; 6]).unwrap().shape(), (2, 3));
        assert_eq!(
            Matrix::from_shape(&[1, 1, 1], vec![0]).unwrap_err(),
            ShapeError::Dimensionality { ndim: 3 }
        );
    }

    #[test]
    fn test_from_shape_scalar_wrong_length() {
        assert_eq!(
            Matrix::<i32>::from_shape(&[], Vec::new()).unwrap_err(),
            ShapeError::LengthMismatch {
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.get(1, 1), Some(&4));
        assert_eq!(m.get(2, 0), None);
        // In-range flat offset but out-of-range column.
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_row_and_column() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.column(1), vec![2, 4, 6]);
        assert_eq!(m.iter_rows().count(), 3);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.row(0), &[1, 4]);
        assert_eq!(t.row(2), &[3, 6]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_index_mut_and_filled() {
        let mut m = Matrix::filled(2, 2, 1.0);
        m[(0, 1)] = 0.5;
        assert_eq!(m.as_slice(), &[1.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_square_side() {
        assert_eq!(Matrix::filled(3, 3, 0).square_side(), Ok(3));
        assert_eq!(
            Matrix::filled(2, 3, 0).square_side(),
            Err(ShapeError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_out_of_bounds() {
        let m = Matrix::filled(2, 2, 0);
        let _ = m[(0, 2)];
    }
}
