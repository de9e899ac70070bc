//! The example transformations and the helper that applies one to two
//! vectors at once.
pub mod linear;
pub mod transformation_trait;

use log::debug;
use ndarray::Array2;

use crate::error::ShapeError;
use crate::math::hstack;

pub use linear::{h_scaling_matrix, l, l_matrix, t, t_h_scaling};
pub use transformation_trait::Transformation;

/// Stack `vector1` and `vector2` column-wise and transform both in one call.
///
/// This relies on `transformation` accepting a multi-column matrix, which
/// holds for the matrix-product transformations ([`l`], [`t_h_scaling`]).
/// [`t`] only reads the first column and yields a 3x1 result.
pub fn transform_vectors<T>(
    transformation: &T,
    vector1: &Array2<f64>,
    vector2: &Array2<f64>,
) -> Result<Array2<f64>, ShapeError>
where
    T: Transformation + ?Sized,
{
    let full_vector = hstack(vector1, vector2)?;
    debug!(
        "Applying {} to stacked vectors of shape {:?}",
        transformation.name(),
        full_vector.dim()
    );
    transformation.apply(&full_vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{column_vector, e1, e2};
    use ndarray::array;

    #[test]
    fn test_transform_vectors_h_scaling_basis() {
        let result = transform_vectors(&t_h_scaling, &e1(), &e2()).unwrap();
        assert_eq!(result, array![[2.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_transform_vectors_with_l() {
        let result = transform_vectors(&l, &e1(), &e2()).unwrap();
        assert_eq!(result, l_matrix());
    }

    #[test]
    fn test_transform_vectors_with_t_truncates() {
        let result = transform_vectors(&t, &e1(), &e2()).unwrap();
        assert_eq!(result.dim(), (3, 1));
        assert_eq!(result, array![[3.0], [0.0], [0.0]]);
    }

    #[test]
    fn test_transform_vectors_row_mismatch() {
        let err = transform_vectors(&t_h_scaling, &e1(), &column_vector(&[1.0, 2.0, 3.0]))
            .unwrap_err();
        assert!(matches!(err, ShapeError::Concat { .. }));
    }
}
