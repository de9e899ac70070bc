use ndarray::{Array1, Array2};

use crate::error::ShapeError;

/// Build an `(n, 1)` column vector from its entries.
pub fn column_vector(values: &[f64]) -> Array2<f64> {
    Array1::from_vec(values.to_vec()).insert_axis(ndarray::Axis(1))
}

/// First standard basis vector of the plane, `(1, 0)ᵗ`.
pub fn e1() -> Array2<f64> {
    column_vector(&[1.0, 0.0])
}

/// Second standard basis vector of the plane, `(0, 1)ᵗ`.
pub fn e2() -> Array2<f64> {
    column_vector(&[0.0, 1.0])
}

/// The `(x, y)` coordinates of a 2x1 column vector.
pub fn planar(vector: &Array2<f64>) -> Result<(f64, f64), ShapeError> {
    match vector.dim() {
        (2, 1) => Ok((vector[[0, 0]], vector[[1, 0]])),
        (rows, cols) => Err(ShapeError::NotPlanar(rows, cols)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_vector_shape() {
        let v = column_vector(&[3.0, 5.0]);
        assert_eq!(v.dim(), (2, 1));
        assert_eq!(v[[1, 0]], 5.0);
    }

    #[test]
    fn test_planar_rejects_3d() {
        let v = column_vector(&[1.0, 2.0, 3.0]);
        assert_eq!(planar(&v), Err(ShapeError::NotPlanar(3, 1)));
        assert_eq!(planar(&e2()), Ok((0.0, 1.0)));
    }
}
