use core::fmt;

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

/// Which piece of a state-space model a dimension error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// State-transition matrix.
    A,
    /// Input-to-state matrix.
    B,
    /// State-to-output matrix.
    C,
    /// Feedthrough matrix.
    D,
    /// State vector.
    X,
    /// A single input sample.
    U,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixKind::A => "A",
            MatrixKind::B => "B",
            MatrixKind::C => "C",
            MatrixKind::D => "D",
            MatrixKind::X => "x",
            MatrixKind::U => "u",
        };
        f.write_str(name)
    }
}

/// Matrix axis. Vectors report their length as `Rows`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("rows"),
            Axis::Columns => f.write_str("columns"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Dimension mismatch: {matrix} has {actual} {axis}, expected {expected}")]
    DimensionMismatch {
        matrix: MatrixKind,
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Missing argument: {what}")]
    NullArgument { what: &'static str },

    #[error("Missing input sample at step {index}")]
    NullInput { index: usize },

    #[error("Not supported: {what}")]
    NotSupported { what: String },

    #[error("Name not found: {name}")]
    NotFound { name: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },
}

impl ModelError {
    pub fn invalid_arg(what: impl Into<String>) -> Self {
        ModelError::InvalidArg { what: what.into() }
    }

    pub fn not_supported(what: impl Into<String>) -> Self {
        ModelError::NotSupported { what: what.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message_names_axis() {
        let err = ModelError::DimensionMismatch {
            matrix: MatrixKind::B,
            axis: Axis::Rows,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: B has 2 rows, expected 3"
        );
    }

    #[test]
    fn index_oob_message() {
        let err = ModelError::IndexOob {
            what: "output",
            index: 4,
            len: 2,
        };
        assert!(err.to_string().contains("index=4"));
    }
}
