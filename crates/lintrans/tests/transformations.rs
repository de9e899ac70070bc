//! Integration tests for the example transformations and `transform_vectors`.

use lintrans::config::TransformationKind;
use lintrans::math::{column_vector, e1, e2, hstack, MatrixDisplay};
use lintrans::transform::{h_scaling_matrix, l, l_matrix, t, t_h_scaling};
use lintrans::{transform_vectors, ShapeError, Transformation};
use ndarray::array;

// ---------------------------------------------------------------------------
// T and L
// ---------------------------------------------------------------------------

#[test]
fn t_and_l_agree_on_a_grid() {
    for a in -3..=3 {
        for b in -3..=3 {
            let (a, b) = (a as f64 * 1.5, b as f64 * 0.5);
            let v = column_vector(&[a, b]);
            let expected = array![[3.0 * a], [0.0], [-2.0 * b]];
            assert_eq!(t(&v).unwrap(), expected);
            assert_eq!(l(&v).unwrap(), expected);
        }
    }
}

#[test]
fn three_five_maps_to_nine_zero_minus_ten() {
    let v = column_vector(&[3.0, 5.0]);
    let w = t(&v).unwrap();
    assert_eq!(w, array![[9.0], [0.0], [-10.0]]);
    assert_eq!(MatrixDisplay(&w).to_string(), "[[  9]\n [  0]\n [-10]]");
}

#[test]
fn repeated_calls_are_identical() {
    let v = column_vector(&[3.0, 5.0]);
    assert_eq!(t(&v).unwrap(), t(&v).unwrap());
    assert_eq!(l(&v).unwrap(), l(&v).unwrap());
    assert_eq!(t_h_scaling(&v).unwrap(), t_h_scaling(&v).unwrap());
    assert_eq!(v, column_vector(&[3.0, 5.0]));
}

#[test]
fn l_matrix_is_constant() {
    assert_eq!(l_matrix(), array![[3.0, 0.0], [0.0, 0.0], [0.0, -2.0]]);
    assert_eq!(h_scaling_matrix(), array![[2.0, 0.0], [0.0, 1.0]]);
}

// ---------------------------------------------------------------------------
// Horizontal scaling
// ---------------------------------------------------------------------------

#[test]
fn h_scaling_doubles_x_only() {
    for (a, b) in [(1.0, 0.0), (0.0, 1.0), (-2.5, 4.0), (3.0, -3.0)] {
        let w = t_h_scaling(&column_vector(&[a, b])).unwrap();
        assert_eq!(w, array![[2.0 * a], [b]]);
    }
}

#[test]
fn h_scaling_rejects_3d_input() {
    let err = t_h_scaling(&column_vector(&[1.0, 2.0, 3.0])).unwrap_err();
    assert_eq!(
        err,
        ShapeError::MatMul {
            lhs: (2, 2),
            rhs: (3, 1)
        }
    );
    assert!(err.to_string().contains("not aligned"));
}

// ---------------------------------------------------------------------------
// transform_vectors
// ---------------------------------------------------------------------------

#[test]
fn transform_vectors_on_basis_gives_scaling_matrix() {
    let result = transform_vectors(&t_h_scaling, &e1(), &e2()).unwrap();
    assert_eq!(result, array![[2.0, 0.0], [0.0, 1.0]]);
    assert_eq!(result.column(0).to_vec(), vec![2.0, 0.0]);
    assert_eq!(result.column(1).to_vec(), vec![0.0, 1.0]);
}

#[test]
fn transform_vectors_matches_per_column_application() {
    let v1 = column_vector(&[1.0, 2.0]);
    let v2 = column_vector(&[-3.0, 4.0]);
    let batched = transform_vectors(&l, &v1, &v2).unwrap();
    let separate = hstack(&l(&v1).unwrap(), &l(&v2).unwrap()).unwrap();
    assert_eq!(batched, separate);
}

#[test]
fn transform_vectors_accepts_closures_and_kinds() {
    let negate = |v: &ndarray::Array2<f64>| -> Result<ndarray::Array2<f64>, ShapeError> { Ok(-v) };
    let result = transform_vectors(&negate, &e1(), &e2()).unwrap();
    assert_eq!(result, array![[-1.0, 0.0], [0.0, -1.0]]);

    let kind = TransformationKind::HScaling;
    assert_eq!(kind.name(), "T_hScaling");
    assert_eq!(
        transform_vectors(&kind, &e1(), &e2()).unwrap(),
        h_scaling_matrix()
    );
}

#[test]
fn transform_vectors_with_explicit_t_keeps_first_column() {
    let result = transform_vectors(&t, &column_vector(&[3.0, 5.0]), &e2()).unwrap();
    assert_eq!(result, array![[9.0], [0.0], [-10.0]]);
}

#[test]
fn transform_vectors_dyn_transformation() {
    let boxed: Box<dyn Transformation> = Box::new(TransformationKind::Matrix);
    let result = transform_vectors(boxed.as_ref(), &e1(), &e2()).unwrap();
    assert_eq!(result, l_matrix());
}
