use std::error::Error;
use std::fmt;

/// Shape failures raised while multiplying, stacking or plotting column vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Matrix product with an inner dimension mismatch: (lhs shape, rhs shape).
    MatMul {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Horizontal stacking of arrays with different row counts.
    Concat {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// An input that does not have the rows/columns a transformation indexes into.
    Input {
        expected_rows: usize,
        found: (usize, usize),
    },
    /// A vector that cannot be drawn on the plane.
    NotPlanar(usize, usize),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::MatMul { lhs, rhs } => write!(
                f,
                "matrices are not aligned: ({}, {}) @ ({}, {})",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            ShapeError::Concat { left, right } => write!(
                f,
                "cannot stack ({}, {}) and ({}, {}) side by side: row counts differ",
                left.0, left.1, right.0, right.1
            ),
            ShapeError::Input {
                expected_rows,
                found,
            } => write!(
                f,
                "expected a column vector with {} rows, found shape ({}, {})",
                expected_rows, found.0, found.1
            ),
            ShapeError::NotPlanar(rows, cols) => write!(
                f,
                "only 2x1 vectors can be plotted, found shape ({}, {})",
                rows, cols
            ),
        }
    }
}

impl Error for ShapeError {}
