use log::debug;
use ndarray::{array, Array2};

use crate::error::ShapeError;
use crate::math::{matmul, MatrixDisplay};

/// `T((v1, v2)) = (3 v1, 0, -2 v2)`, written out one coordinate at a time.
///
/// Only the first column of `vector` is read and the result is always 3x1,
/// so stacking several vectors into the input does not transform them all.
pub fn t(vector: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
    if vector.nrows() < 2 || vector.ncols() == 0 {
        return Err(ShapeError::Input {
            expected_rows: 2,
            found: vector.dim(),
        });
    }

    let mut result = Array2::zeros((3, 1));
    result[[0, 0]] = 3.0 * vector[[0, 0]];
    result[[2, 0]] = -2.0 * vector[[1, 0]];

    debug!("T: {:?} -> {:?}", vector.dim(), result.dim());
    Ok(result)
}

/// Matrix of `L`, the same map as [`t`].
pub fn l_matrix() -> Array2<f64> {
    array![[3.0, 0.0], [0.0, 0.0], [0.0, -2.0]]
}

/// `T` as a matrix product. Prints the transformation matrix before applying it.
pub fn l(vector: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
    let transformation_matrix = l_matrix();
    println!("Transformation matrix:\n{}\n", MatrixDisplay(&transformation_matrix));

    let result = matmul(&transformation_matrix, vector)?;
    debug!("L: {:?} -> {:?}", vector.dim(), result.dim());
    Ok(result)
}

/// Matrix of the horizontal scaling: factor 2 along x, y unchanged.
pub fn h_scaling_matrix() -> Array2<f64> {
    array![[2.0, 0.0], [0.0, 1.0]]
}

/// Horizontal scaling (dilation) of one or more stacked 2D column vectors.
pub fn t_h_scaling(vector: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
    let result = matmul(&h_scaling_matrix(), vector)?;
    debug!("T_hScaling: {:?} -> {:?}", vector.dim(), result.dim());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::column_vector;

    #[test]
    fn test_t_concrete_case() {
        let w = t(&column_vector(&[3.0, 5.0])).unwrap();
        assert_eq!(w, array![[9.0], [0.0], [-10.0]]);
    }

    #[test]
    fn test_t_rejects_short_input() {
        let err = t(&column_vector(&[3.0])).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Input {
                expected_rows: 2,
                found: (1, 1)
            }
        );
    }

    #[test]
    fn test_t_reads_first_column_only() {
        let stacked = array![[1.0, 4.0], [2.0, 8.0]];
        let w = t(&stacked).unwrap();
        assert_eq!(w, array![[3.0], [0.0], [-4.0]]);
    }

    #[test]
    fn test_l_matches_t() {
        for (a, b) in [(3.0, 5.0), (-1.0, 2.5), (0.0, 0.0), (7.0, -4.0)] {
            let v = column_vector(&[a, b]);
            assert_eq!(t(&v).unwrap(), l(&v).unwrap());
        }
    }

    #[test]
    fn test_l_rejects_3d_input() {
        let err = l(&column_vector(&[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, ShapeError::MatMul { lhs: (3, 2), rhs: (3, 1) }));
    }

    #[test]
    fn test_h_scaling_basis() {
        assert_eq!(t_h_scaling(&column_vector(&[1.0, 0.0])).unwrap(), array![[2.0], [0.0]]);
        assert_eq!(t_h_scaling(&column_vector(&[0.0, 1.0])).unwrap(), array![[0.0], [1.0]]);
    }
}
