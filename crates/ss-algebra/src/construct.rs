//! Matrix constructors and conversions.

use nalgebra::{DMatrix, DVector};
use ss_core::{Axis, MatrixKind, ModelError, ModelResult, Tolerances, slices_nearly_equal};

pub fn zeros(rows: usize, cols: usize) -> DMatrix<f64> {
    DMatrix::zeros(rows, cols)
}

pub fn ones(rows: usize, cols: usize) -> DMatrix<f64> {
    DMatrix::from_element(rows, cols, 1.0)
}

/// Ones on the leading diagonal, zeros elsewhere. Works for rectangular shapes.
pub fn identity(rows: usize, cols: usize) -> DMatrix<f64> {
    DMatrix::identity(rows, cols)
}

pub fn vector_from_slice(values: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(values)
}

/// Build a matrix from a list of rows.
///
/// Every row must have the same length as the first one; an empty row list
/// produces a `0 × 0` matrix.
pub fn from_rows(kind: MatrixKind, rows: &[Vec<f64>]) -> ModelResult<DMatrix<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, Vec::len);
    for row in rows {
        if row.len() != ncols {
            return Err(ModelError::DimensionMismatch {
                matrix: kind,
                axis: Axis::Columns,
                expected: ncols,
                actual: row.len(),
            });
        }
    }
    let data: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(DMatrix::from_row_slice(nrows, ncols, &data))
}

/// Convert a matrix back into a list of rows.
pub fn to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// Shape-aware element-wise comparison.
pub fn matrices_nearly_equal(a: &DMatrix<f64>, b: &DMatrix<f64>, tol: Tolerances) -> bool {
    a.shape() == b.shape() && slices_nearly_equal(a.as_slice(), b.as_slice(), tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_identity_seeds_leading_diagonal() {
        let m = identity(3, 2);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(2, 0)], 0.0);
        assert_eq!(m[(2, 1)], 0.0);
    }

    #[test]
    fn from_rows_is_row_major() {
        let m = from_rows(MatrixKind::A, &[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(to_rows(&m), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = from_rows(MatrixKind::C, &[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                matrix: MatrixKind::C,
                axis: Axis::Columns,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn nearly_equal_checks_shape() {
        let tol = Tolerances::default();
        assert!(matrices_nearly_equal(&ones(2, 1), &ones(2, 1), tol));
        assert!(!matrices_nearly_equal(&ones(2, 1), &ones(1, 2), tol));
        assert!(!matrices_nearly_equal(&ones(2, 1), &zeros(2, 1), tol));
    }
}
