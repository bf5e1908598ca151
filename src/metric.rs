//! Symmetric row metrics and the pairwise driver that evaluates them.
//!
//! A [`SymmetricMetric`] compares two equal-length rows. [`pairwise_rows`]
//! evaluates it once per unordered row pair (diagonal included) and mirrors
//! the value across the diagonal, so the result is symmetric by construction
//! rather than by floating-point luck.

use crate::matrix::Matrix;

/// A symmetric comparison between two rows.
///
/// Implementations must satisfy `distance(a, b) == distance(b, a)`;
/// [`pairwise_rows`] relies on it and only evaluates the upper triangle.
pub trait SymmetricMetric<T> {
    /// Value produced for one row pair.
    type Output;

    /// Compare rows `a` and `b` (equal lengths).
    fn distance(&self, a: &[T], b: &[T]) -> Self::Output;
}

/// Number of positions where two rows differ (Hamming distance over
/// arbitrary `PartialEq` elements).
///
/// Uses `!=`, so for floats a NaN position always counts as a difference.
///
/// ```rust
/// use distmat::metric::{Mismatch, SymmetricMetric};
///
/// assert_eq!(Mismatch.distance(&[1, 2, 3], &[1, 3, 1]), 2);
/// assert_eq!(Mismatch.distance(&['a', 'b'], &['a', 'b']), 0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Mismatch;

impl<T: PartialEq> SymmetricMetric<T> for Mismatch {
    type Output = usize;

    #[inline]
    fn distance(&self, a: &[T], b: &[T]) -> usize {
        debug_assert_eq!(a.len(), b.len(), "Mismatch: row length mismatch");
        a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
    }
}

/// Evaluate `metric` on every pair of rows of `values`.
///
/// Returns an R×R matrix where entry `(i, j)` is `metric(row i, row j)`.
/// Each unordered pair is evaluated once; `(j, i)` receives a copy.
pub fn pairwise_rows<T, M>(values: &Matrix<T>, metric: &M) -> Matrix<M::Output>
where
    M: SymmetricMetric<T>,
    M::Output: Clone + Default,
{
    let n = values.rows();
    let mut result = Matrix::filled(n, n, M::Output::default());

    for i in 0..n {
        let row_i = values.row(i);
        for j in i..n {
            let d = metric.distance(row_i, values.row(j));
            if i != j {
                result[(j, i)] = d.clone();
            }
            result[(i, j)] = d;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Absolute difference of row sums, a cheap symmetric metric for testing
    /// the driver independently of `Mismatch`.
    struct SumGap;

    impl SymmetricMetric<i64> for SumGap {
        type Output = i64;

        fn distance(&self, a: &[i64], b: &[i64]) -> i64 {
            (a.iter().sum::<i64>() - b.iter().sum::<i64>()).abs()
        }
    }

    #[test]
    fn test_mismatch_counts_differences() {
        assert_eq!(Mismatch.distance(&[1, 2, 3], &[2, 2, 2]), 2);
        let empty: [u8; 0] = [];
        assert_eq!(Mismatch.distance(&empty[..], &empty[..]), 0);
    }

    #[test]
    fn test_mismatch_nan_never_equal() {
        let a = [f64::NAN, 1.0];
        assert_eq!(Mismatch.distance(&a, &a), 1);
    }

    #[test]
    fn test_pairwise_rows_custom_metric() {
        let m = Matrix::from_rows(&[vec![1i64, 2], vec![3, 4], vec![0, 0]]).unwrap();
        let d = pairwise_rows(&m, &SumGap);

        assert_eq!(d.shape(), (3, 3));
        assert_eq!(d.row(0), &[0, 4, 3]);
        assert_eq!(d.row(1), &[4, 0, 7]);
        assert_eq!(d.row(2), &[3, 7, 0]);
    }

    #[test]
    fn test_pairwise_rows_empty() {
        let m: Matrix<i64> = Matrix::from_rows(&[]).unwrap();
        let d = pairwise_rows(&m, &SumGap);
        assert_eq!(d.shape(), (0, 0));
    }
}
