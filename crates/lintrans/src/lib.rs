//! lintrans: linear transformations written two ways.
//!
//! A transformation of column vectors can be spelled out coordinate by
//! coordinate ([`transform::t`]) or as a product with a fixed matrix
//! ([`transform::l`]); for a linear map both give the same result. The
//! matrix form also transforms several vectors at once when they are
//! stacked side by side ([`transform::transform_vectors`]).
//!
//! Vectors are `ndarray::Array2<f64>` columns. Plotting and HTML reporting
//! helpers live in [`report`].
pub mod config;
pub mod error;
pub mod math;
pub mod report;
pub mod transform;

pub use error::ShapeError;
pub use transform::{transform_vectors, Transformation};
