//! Backing storage for model matrices.
//!
//! A model either owns its matrices outright or aliases matrices that the
//! caller keeps a handle to. Aliasing avoids a copy on construction; the price
//! is that writes through the caller's handle are visible to the model.

use core::cell::{Ref, RefCell};
use core::ops::Deref;
use std::rc::Rc;

use nalgebra::DMatrix;
use ss_core::{MatrixKind, ModelError, ModelResult};

/// Shared, mutable matrix handle used for aliased construction.
pub type SharedMatrix = Rc<RefCell<DMatrix<f64>>>;

/// Wrap a matrix into a [`SharedMatrix`] handle.
pub fn share(m: DMatrix<f64>) -> SharedMatrix {
    Rc::new(RefCell::new(m))
}

/// How a model holds matrices handed to it as shared handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ownership {
    /// Deep-copy into storage owned exclusively by the model.
    #[default]
    Owned,
    /// Keep the caller's handle. Mutation through that handle is observable in
    /// the model, including shape changes, which later operations report as
    /// dimension errors.
    Borrowed,
}

/// A matrix argument: either a plain value or a shared handle.
#[derive(Debug, Clone)]
pub enum MatrixSource {
    Value(DMatrix<f64>),
    Shared(SharedMatrix),
}

impl From<DMatrix<f64>> for MatrixSource {
    fn from(m: DMatrix<f64>) -> Self {
        MatrixSource::Value(m)
    }
}

impl From<SharedMatrix> for MatrixSource {
    fn from(m: SharedMatrix) -> Self {
        MatrixSource::Shared(m)
    }
}

impl From<&SharedMatrix> for MatrixSource {
    fn from(m: &SharedMatrix) -> Self {
        MatrixSource::Shared(Rc::clone(m))
    }
}

#[derive(Debug)]
pub(crate) enum MatrixCell {
    Owned(DMatrix<f64>),
    Shared(SharedMatrix),
}

impl MatrixCell {
    pub(crate) fn from_source(source: MatrixSource, ownership: Ownership) -> Self {
        match (source, ownership) {
            (MatrixSource::Value(m), _) => MatrixCell::Owned(m),
            (MatrixSource::Shared(m), Ownership::Borrowed) => MatrixCell::Shared(m),
            (MatrixSource::Shared(m), Ownership::Owned) => {
                let copy = m.borrow().clone();
                MatrixCell::Owned(copy)
            }
        }
    }

    /// Borrow the matrix, reporting a conflicting outstanding mutable borrow
    /// of a shared handle as an error.
    pub(crate) fn load(&self, kind: MatrixKind) -> ModelResult<MatrixRef<'_>> {
        match self {
            MatrixCell::Owned(m) => Ok(MatrixRef::Owned(m)),
            MatrixCell::Shared(m) => m.try_borrow().map(MatrixRef::Shared).map_err(|_| {
                ModelError::not_supported(format!(
                    "matrix {kind} is mutably borrowed through its shared handle"
                ))
            }),
        }
    }

    /// Borrow the matrix; panics if a shared handle is mutably borrowed.
    pub(crate) fn get(&self) -> MatrixRef<'_> {
        match self {
            MatrixCell::Owned(m) => MatrixRef::Owned(m),
            MatrixCell::Shared(m) => MatrixRef::Shared(m.borrow()),
        }
    }

    pub(crate) fn ownership(&self) -> Ownership {
        match self {
            MatrixCell::Owned(_) => Ownership::Owned,
            MatrixCell::Shared(_) => Ownership::Borrowed,
        }
    }
}

/// Read guard over a model matrix.
#[derive(Debug)]
pub enum MatrixRef<'a> {
    Owned(&'a DMatrix<f64>),
    Shared(Ref<'a, DMatrix<f64>>),
}

impl Deref for MatrixRef<'_> {
    type Target = DMatrix<f64>;

    fn deref(&self) -> &DMatrix<f64> {
        match self {
            MatrixRef::Owned(m) => m,
            MatrixRef::Shared(m) => m,
        }
    }
}
