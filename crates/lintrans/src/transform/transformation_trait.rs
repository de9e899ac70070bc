use ndarray::Array2;

use crate::error::ShapeError;

/// A map from column vectors (or several column vectors stacked side by side)
/// to column vectors.
///
/// Implemented for every plain function or closure with the matching
/// signature, so `t`, `l` and `t_h_scaling` can be passed wherever a
/// transformation is expected.
pub trait Transformation {
    fn apply(&self, input: &Array2<f64>) -> Result<Array2<f64>, ShapeError>;

    /// Optional human readable name used in plot titles and logs
    fn name(&self) -> &str {
        "T"
    }
}

impl<F> Transformation for F
where
    F: Fn(&Array2<f64>) -> Result<Array2<f64>, ShapeError>,
{
    fn apply(&self, input: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
        self(input)
    }
}
