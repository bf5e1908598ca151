//! Pairwise similarity matrices and ultrametric correction.
//!
//! `distmat` provides three independent building blocks for distance-based
//! clustering pipelines:
//!
//! - **Dissimilarity**: [`rowwise_dissimilarity`] counts differing columns
//!   for every pair of rows (Hamming distance over any `PartialEq` element).
//! - **Cosine**: [`rowwise_cosine_similarity`] builds the cosine similarity
//!   matrix of the *columns*.
//! - **Ultrametric**: [`convert_to_ultrametric`] applies one minimax
//!   relaxation pass so that `d(i, j) <= max(d(i, k), d(k, j))` holds through
//!   every single intermediate `k`.
//!
//! All routines borrow a [`Matrix`] and return a freshly allocated one.
//!
//! # Shapes
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`rowwise_dissimilarity`] | R×C, any `PartialEq` | R×R `usize` |
//! | [`rowwise_cosine_similarity`] | R×C `f64` | C×C `f64` |
//! | [`convert_to_ultrametric`] | N×N `f64` | N×N `f64` or [`ShapeError`] |
//!
//! Dynamically shaped input goes through [`Matrix::from_shape`], which
//! promotes scalars and 1D vectors to a single row.
//!
//! # Features
//!
//! - `parallel` (default): run the ultrametric outer loop on rayon.
//!
//! # Example
//!
//! ```rust
//! use distmat::{convert_to_ultrametric, rowwise_cosine_similarity, rowwise_dissimilarity, Matrix};
//!
//! let labels = Matrix::from_rows(&[
//!     vec![1, 2, 3],
//!     vec![1, 3, 1],
//!     vec![2, 2, 2],
//! ]).unwrap();
//! let counts = rowwise_dissimilarity(&labels);
//! assert_eq!(counts.row(1), &[2, 0, 3]);
//!
//! let dist = counts.map(|&c| c as f64 / 3.0);
//! let ultra = convert_to_ultrametric(&dist).unwrap();
//! assert_eq!(ultra[(0, 0)], 1.0); // diagonal keeps the fill value
//!
//! let sim = rowwise_cosine_similarity(&dist);
//! assert!((sim[(0, 1)] - sim[(1, 0)]).abs() < 1e-12);
//! ```
//!
//! # References
//!
//! - Johnson, S.C. (1967). "Hierarchical Clustering Schemes" (Psychometrika):
//!   ultrametrics as the distances realized by dendrograms.
//! - Hamming, R.W. (1950). "Error Detecting and Error Correcting Codes".

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cosine;
pub mod dissimilarity;
mod error;
mod matrix;
pub mod metric;
pub mod ultrametric;

pub use cosine::rowwise_cosine_similarity;
pub use dissimilarity::rowwise_dissimilarity;
pub use error::{Result, ShapeError};
pub use matrix::Matrix;
pub use ultrametric::{
    convert_to_ultrametric, convert_to_ultrametric_with, is_ultrametric, Execution,
    ULTRAMETRIC_FILL,
};
