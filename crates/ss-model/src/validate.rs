//! Dimension checks for the four system matrices, the state vector and names.
//!
//! All checks are pure; callers run them before committing anything so a
//! failed update leaves the model untouched.

use nalgebra::{DMatrix, DVector};
use ss_core::{Axis, MatrixKind, ModelError, ModelResult};

use crate::names::{SignalKind, SignalNames};

/// Model dimensions derived from the matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub states: usize,
    pub inputs: usize,
    pub outputs: usize,
}

impl Dims {
    /// `states = a.cols`, `inputs = b.cols`, `outputs = c.rows`.
    pub fn derive(a: &DMatrix<f64>, b: &DMatrix<f64>, c: &DMatrix<f64>) -> Self {
        Self {
            states: a.ncols(),
            inputs: b.ncols(),
            outputs: c.nrows(),
        }
    }

    pub fn of(&self, kind: SignalKind) -> usize {
        match kind {
            SignalKind::State => self.states,
            SignalKind::Input => self.inputs,
            SignalKind::Output => self.outputs,
        }
    }
}

/// Verify the shapes of `a, b, c, d` against the claimed dimensions.
///
/// Reports the first violation found, in the order A, B, C, D and rows before
/// columns.
pub fn check_dimensions(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    c: &DMatrix<f64>,
    d: &DMatrix<f64>,
    dims: Dims,
) -> ModelResult<()> {
    expect(MatrixKind::A, Axis::Rows, dims.states, a.nrows())?;
    expect(MatrixKind::A, Axis::Columns, dims.states, a.ncols())?;
    expect(MatrixKind::B, Axis::Rows, dims.states, b.nrows())?;
    expect(MatrixKind::B, Axis::Columns, dims.inputs, b.ncols())?;
    expect(MatrixKind::C, Axis::Rows, dims.outputs, c.nrows())?;
    expect(MatrixKind::C, Axis::Columns, dims.states, c.ncols())?;
    expect(MatrixKind::D, Axis::Rows, dims.outputs, d.nrows())?;
    expect(MatrixKind::D, Axis::Columns, dims.inputs, d.ncols())?;
    Ok(())
}

/// Every dimension of a model must be at least one.
pub fn check_non_empty(dims: Dims) -> ModelResult<()> {
    for kind in SignalKind::ALL {
        if dims.of(kind) < 1 {
            return Err(ModelError::invalid_arg(format!(
                "a model needs at least one {kind}, got {}",
                dims.of(kind)
            )));
        }
    }
    Ok(())
}

pub fn check_state(x: &DVector<f64>, dims: Dims) -> ModelResult<()> {
    expect(MatrixKind::X, Axis::Rows, dims.states, x.len())
}

/// Present name lists must match their dimension exactly.
pub fn check_names(names: &SignalNames, dims: Dims) -> ModelResult<()> {
    for kind in SignalKind::ALL {
        if let Some(list) = names.get(kind) {
            check_name_count(kind, list.len(), dims)?;
        }
    }
    Ok(())
}

pub(crate) fn check_name_count(kind: SignalKind, count: usize, dims: Dims) -> ModelResult<()> {
    let expected = dims.of(kind);
    if count != expected {
        return Err(ModelError::invalid_arg(format!(
            "{count} {kind} names given for {expected} {kind}s"
        )));
    }
    Ok(())
}

fn expect(matrix: MatrixKind, axis: Axis, expected: usize, actual: usize) -> ModelResult<()> {
    if expected != actual {
        return Err(ModelError::DimensionMismatch {
            matrix,
            axis,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::NameList;
    use ss_algebra::zeros;

    fn dims(states: usize, inputs: usize, outputs: usize) -> Dims {
        Dims {
            states,
            inputs,
            outputs,
        }
    }

    #[test]
    fn consistent_shapes_pass() {
        let (a, b, c, d) = (zeros(2, 2), zeros(2, 1), zeros(3, 2), zeros(3, 1));
        assert_eq!(Dims::derive(&a, &b, &c), dims(2, 1, 3));
        check_dimensions(&a, &b, &c, &d, dims(2, 1, 3)).unwrap();
    }

    #[test]
    fn non_square_a_is_reported_on_columns() {
        let err = check_dimensions(
            &zeros(2, 3),
            &zeros(2, 1),
            &zeros(1, 2),
            &zeros(1, 1),
            dims(2, 1, 1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                matrix: MatrixKind::A,
                axis: Axis::Columns,
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn b_rows_must_match_states() {
        let err = check_dimensions(
            &zeros(2, 2),
            &zeros(3, 1),
            &zeros(1, 2),
            &zeros(1, 1),
            dims(2, 1, 1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                matrix: MatrixKind::B,
                axis: Axis::Rows,
                ..
            }
        ));
    }

    #[test]
    fn d_columns_must_match_inputs() {
        let err = check_dimensions(
            &zeros(1, 1),
            &zeros(1, 2),
            &zeros(1, 1),
            &zeros(1, 1),
            dims(1, 2, 1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                matrix: MatrixKind::D,
                axis: Axis::Columns,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn state_length_checked() {
        let x = DVector::zeros(3);
        assert!(check_state(&x, dims(3, 1, 1)).is_ok());
        assert!(matches!(
            check_state(&x, dims(2, 1, 1)),
            Err(ModelError::DimensionMismatch {
                matrix: MatrixKind::X,
                ..
            })
        ));
    }

    #[test]
    fn empty_dimension_rejected() {
        assert!(check_non_empty(dims(1, 1, 1)).is_ok());
        assert!(matches!(
            check_non_empty(dims(1, 0, 1)),
            Err(ModelError::InvalidArg { .. })
        ));
    }

    #[test]
    fn name_counts_checked() {
        let mut names = SignalNames::default();
        *names.slot(SignalKind::Output) = Some(NameList::new(["y0", "y1"]).unwrap());
        assert!(check_names(&names, dims(1, 1, 2)).is_ok());
        assert!(check_names(&names, dims(1, 1, 1)).is_err());
    }
}
