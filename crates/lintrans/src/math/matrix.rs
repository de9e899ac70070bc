use std::fmt;

use ndarray::{concatenate, Array2, Axis};

use crate::error::ShapeError;

/// Matrix product `lhs @ rhs`, checking the inner dimensions first.
pub fn matmul(lhs: &Array2<f64>, rhs: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
    if lhs.ncols() != rhs.nrows() {
        return Err(ShapeError::MatMul {
            lhs: lhs.dim(),
            rhs: rhs.dim(),
        });
    }
    Ok(lhs.dot(rhs))
}

/// Place `left` and `right` side by side, column-wise.
pub fn hstack(left: &Array2<f64>, right: &Array2<f64>) -> Result<Array2<f64>, ShapeError> {
    let concat_error = || ShapeError::Concat {
        left: left.dim(),
        right: right.dim(),
    };
    if left.nrows() != right.nrows() {
        return Err(concat_error());
    }
    concatenate(Axis(1), &[left.view(), right.view()]).map_err(|_| concat_error())
}

/// Prints a matrix the way numeric-array libraries do:
///
/// ```text
/// [[  9]
///  [  0]
///  [-10]]
/// ```
///
/// Entries are right-aligned to the widest one; integral values have no
/// fractional part and negative zero prints as `0`.
pub struct MatrixDisplay<'a>(pub &'a Array2<f64>);

fn format_entry(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.0;
        if matrix.is_empty() {
            return write!(f, "[]");
        }

        let entries: Vec<String> = matrix.iter().map(|v| format_entry(*v)).collect();
        let width = entries.iter().map(String::len).max().unwrap_or(0);
        let cols = matrix.ncols();

        for (row, chunk) in entries.chunks(cols).enumerate() {
            f.write_str(if row == 0 { "[[" } else { " [" })?;
            for (col, entry) in chunk.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", entry, width = width)?;
            }
            if row + 1 == matrix.nrows() {
                f.write_str("]]")?;
            } else {
                f.write_str("]\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_matmul_rejects_misaligned() {
        let a = array![[2.0, 0.0], [0.0, 1.0]];
        let v = array![[1.0], [2.0], [3.0]];
        let err = matmul(&a, &v).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MatMul {
                lhs: (2, 2),
                rhs: (3, 1)
            }
        );
    }

    #[test]
    fn test_hstack_two_columns() {
        let stacked = hstack(&array![[1.0], [0.0]], &array![[0.0], [1.0]]).unwrap();
        assert_eq!(stacked, array![[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_display_column() {
        let v = array![[9.0], [0.0], [-10.0]];
        assert_eq!(MatrixDisplay(&v).to_string(), "[[  9]\n [  0]\n [-10]]");
    }

    #[test]
    fn test_display_negative_zero() {
        let v = array![[-0.0, 1.5]];
        assert_eq!(MatrixDisplay(&v).to_string(), "[[  0 1.5]]");
    }
}
