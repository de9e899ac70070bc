//! Column-vector helpers on top of `ndarray`.
//!
//! Vectors are plain `Array2<f64>` values of shape `(n, 1)` so that a single
//! matrix product can transform one vector or several stacked side by side.
pub mod matrix;
pub mod vector;

pub use matrix::{hstack, matmul, MatrixDisplay};
pub use vector::{column_vector, e1, e2, planar};
