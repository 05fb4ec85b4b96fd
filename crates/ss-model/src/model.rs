//! The discrete-time state-space model.

use core::fmt;

use nalgebra::{DMatrix, DVector};
use ss_algebra::{identity, matrices_nearly_equal, ones, zeros};
use ss_core::{MatrixKind, ModelError, ModelResult, SamplePeriod, Tolerances, nearly_equal};
use tracing::debug;

use crate::names::{NameList, SignalKind, SignalNames};
use crate::storage::{MatrixCell, MatrixRef, MatrixSource, Ownership, SharedMatrix};
use crate::validate::{
    Dims, check_dimensions, check_name_count, check_names, check_non_empty, check_state,
};

/// Discrete-time LTI system
///
/// ```text
/// x[k+1] = A·x[k] + B·u[k]
/// y[k]   = C·x[k] + D·u[k]
/// ```
///
/// The dimensions are derived from the matrices: `n_states = A.cols`,
/// `n_inputs = B.cols`, `n_outputs = C.rows`. Every mutation is validated
/// against the other matrices before it is committed.
///
/// [`DiscreteStateSpace::copy_from`] produces a fully independent deep copy.
pub struct DiscreteStateSpace {
    a: MatrixCell,
    b: MatrixCell,
    c: MatrixCell,
    d: MatrixCell,
    pub(crate) x: DVector<f64>,
    ts: SamplePeriod,
    names: SignalNames,
}

impl DiscreteStateSpace {
    /// Placeholder system of the requested size.
    ///
    /// `A` and `B` are identity-seeded, `C` is all ones and `D` is zero. This is
    /// a structural scaffold, not a physically meaningful system.
    pub fn scaffold(n_states: usize, n_inputs: usize, n_outputs: usize) -> ModelResult<Self> {
        check_non_empty(Dims {
            states: n_states,
            inputs: n_inputs,
            outputs: n_outputs,
        })?;
        Ok(Self::assemble(
            MatrixCell::Owned(identity(n_states, n_states)),
            MatrixCell::Owned(identity(n_states, n_inputs)),
            MatrixCell::Owned(ones(n_outputs, n_states)),
            MatrixCell::Owned(zeros(n_outputs, n_inputs)),
        ))
    }

    /// Single-input, single-output scaffold with `n_states` states.
    pub fn scaffold_states(n_states: usize) -> ModelResult<Self> {
        Self::scaffold(n_states, 1, 1)
    }

    /// Build a model that owns the given matrices.
    pub fn new(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
    ) -> ModelResult<Self> {
        Self::from_cells(
            MatrixCell::Owned(a),
            MatrixCell::Owned(b),
            MatrixCell::Owned(c),
            MatrixCell::Owned(d),
        )
    }

    /// Build a model from shared matrix handles.
    ///
    /// With [`Ownership::Owned`] the matrices are deep-copied. With
    /// [`Ownership::Borrowed`] the handles are kept, so writes the caller makes
    /// through them show up in the model. A missing handle fails with
    /// `NullArgument`.
    pub fn from_shared(
        a: Option<&SharedMatrix>,
        b: Option<&SharedMatrix>,
        c: Option<&SharedMatrix>,
        d: Option<&SharedMatrix>,
        ownership: Ownership,
    ) -> ModelResult<Self> {
        let a = a.ok_or(ModelError::NullArgument { what: "matrix A" })?;
        let b = b.ok_or(ModelError::NullArgument { what: "matrix B" })?;
        let c = c.ok_or(ModelError::NullArgument { what: "matrix C" })?;
        let d = d.ok_or(ModelError::NullArgument { what: "matrix D" })?;
        Self::from_sources(a.into(), b.into(), c.into(), d.into(), ownership)
    }

    /// SISO convenience: `B = [1]`, `C` a row of ones, `D = [0]`.
    ///
    /// Since `B` is always `1 × 1`, only single-state `A` matrices validate.
    pub fn from_single_matrix(
        a: impl Into<MatrixSource>,
        ownership: Ownership,
    ) -> ModelResult<Self> {
        let a = MatrixCell::from_source(a.into(), ownership);
        let n_states = a.load(MatrixKind::A)?.ncols();
        Self::from_cells(
            a,
            MatrixCell::Owned(ones(1, 1)),
            MatrixCell::Owned(ones(1, n_states)),
            MatrixCell::Owned(zeros(1, 1)),
        )
    }

    pub(crate) fn from_sources(
        a: MatrixSource,
        b: MatrixSource,
        c: MatrixSource,
        d: MatrixSource,
        ownership: Ownership,
    ) -> ModelResult<Self> {
        Self::from_cells(
            MatrixCell::from_source(a, ownership),
            MatrixCell::from_source(b, ownership),
            MatrixCell::from_source(c, ownership),
            MatrixCell::from_source(d, ownership),
        )
    }

    fn from_cells(a: MatrixCell, b: MatrixCell, c: MatrixCell, d: MatrixCell) -> ModelResult<Self> {
        {
            let (ar, br, cr, dr) = (
                a.load(MatrixKind::A)?,
                b.load(MatrixKind::B)?,
                c.load(MatrixKind::C)?,
                d.load(MatrixKind::D)?,
            );
            let dims = Dims::derive(&ar, &br, &cr);
            check_dimensions(&ar, &br, &cr, &dr, dims)?;
            check_non_empty(dims)?;
        }
        Ok(Self::assemble(a, b, c, d))
    }

    fn assemble(a: MatrixCell, b: MatrixCell, c: MatrixCell, d: MatrixCell) -> Self {
        let n_states = a.get().ncols();
        Self {
            a,
            b,
            c,
            d,
            x: DVector::zeros(n_states),
            ts: SamplePeriod::default(),
            names: SignalNames::default(),
        }
    }

    /// Deep copy of `other`.
    ///
    /// Matrices, names and sampling period are always copied; the state is
    /// copied only when `copy_state` is set and is zero otherwise. The copy
    /// owns all of its storage even if `other` aliases shared handles.
    ///
    /// Shapes are re-checked first, so a borrowed handle resized by its owner
    /// fails with `DimensionMismatch` instead of producing an inconsistent copy.
    pub fn copy_from(other: &DiscreteStateSpace, copy_state: bool) -> ModelResult<Self> {
        let (a, b, c, d) = other.load_checked()?;
        check_names(&other.names, Dims::derive(&a, &b, &c))?;
        let x = if copy_state {
            other.x.clone()
        } else {
            DVector::zeros(other.x.len())
        };
        Ok(Self {
            a: MatrixCell::Owned(a.clone_owned()),
            b: MatrixCell::Owned(b.clone_owned()),
            c: MatrixCell::Owned(c.clone_owned()),
            d: MatrixCell::Owned(d.clone_owned()),
            x,
            ts: other.ts,
            names: other.names.clone(),
        })
    }

    /// Attach a sampling period, consuming `self`.
    pub fn with_sampling_period(mut self, ts: SamplePeriod) -> Self {
        self.ts = ts;
        self
    }

    // ---- dimensions ----

    /// Number of states (`A` columns). Panics like [`Self::a`].
    pub fn n_states(&self) -> usize {
        self.a.get().ncols()
    }

    /// Number of inputs (`B` columns). Panics like [`Self::a`].
    pub fn n_inputs(&self) -> usize {
        self.b.get().ncols()
    }

    /// Number of outputs (`C` rows). Panics like [`Self::a`].
    pub fn n_outputs(&self) -> usize {
        self.c.get().nrows()
    }

    /// Panics like [`Self::a`].
    pub fn dims(&self) -> Dims {
        Dims::derive(&self.a.get(), &self.b.get(), &self.c.get())
    }

    // ---- matrices ----

    /// State-transition matrix.
    ///
    /// # Panics
    ///
    /// Panics if `A` aliases a shared handle that is currently mutably borrowed.
    pub fn a(&self) -> MatrixRef<'_> {
        self.a.get()
    }

    /// Input-to-state matrix. Same panics as [`Self::a`].
    pub fn b(&self) -> MatrixRef<'_> {
        self.b.get()
    }

    /// State-to-output matrix. Same panics as [`Self::a`].
    pub fn c(&self) -> MatrixRef<'_> {
        self.c.get()
    }

    /// Feedthrough matrix. Same panics as [`Self::a`].
    pub fn d(&self) -> MatrixRef<'_> {
        self.d.get()
    }

    pub fn matrix(&self, kind: MatrixKind) -> ModelResult<MatrixRef<'_>> {
        self.cell(kind)?.load(kind)
    }

    pub fn ownership(&self, kind: MatrixKind) -> ModelResult<Ownership> {
        Ok(self.cell(kind)?.ownership())
    }

    fn cell(&self, kind: MatrixKind) -> ModelResult<&MatrixCell> {
        match kind {
            MatrixKind::A => Ok(&self.a),
            MatrixKind::B => Ok(&self.b),
            MatrixKind::C => Ok(&self.c),
            MatrixKind::D => Ok(&self.d),
            MatrixKind::X | MatrixKind::U => Err(not_a_system_matrix(kind)),
        }
    }

    fn cell_mut(&mut self, kind: MatrixKind) -> ModelResult<&mut MatrixCell> {
        match kind {
            MatrixKind::A => Ok(&mut self.a),
            MatrixKind::B => Ok(&mut self.b),
            MatrixKind::C => Ok(&mut self.c),
            MatrixKind::D => Ok(&mut self.d),
            MatrixKind::X | MatrixKind::U => Err(not_a_system_matrix(kind)),
        }
    }

    /// Borrow all four matrices and re-check their shapes.
    ///
    /// Shapes can only drift when a borrowed handle was resized by its owner.
    pub(crate) fn load_checked(
        &self,
    ) -> ModelResult<(MatrixRef<'_>, MatrixRef<'_>, MatrixRef<'_>, MatrixRef<'_>)> {
        let a = self.a.load(MatrixKind::A)?;
        let b = self.b.load(MatrixKind::B)?;
        let c = self.c.load(MatrixKind::C)?;
        let d = self.d.load(MatrixKind::D)?;
        let dims = Dims::derive(&a, &b, &c);
        check_dimensions(&a, &b, &c, &d, dims)?;
        check_state(&self.x, dims)?;
        Ok((a, b, c, d))
    }

    pub fn set_a(&mut self, a: DMatrix<f64>) -> ModelResult<()> {
        self.replace(MatrixKind::A, a)
    }

    pub fn set_b(&mut self, b: DMatrix<f64>) -> ModelResult<()> {
        self.replace(MatrixKind::B, b)
    }

    pub fn set_c(&mut self, c: DMatrix<f64>) -> ModelResult<()> {
        self.replace(MatrixKind::C, c)
    }

    pub fn set_d(&mut self, d: DMatrix<f64>) -> ModelResult<()> {
        self.replace(MatrixKind::D, d)
    }

    /// Replace one system matrix.
    ///
    /// The replacement is checked against the other three current matrices,
    /// the state vector and any names; on failure nothing changes. The new
    /// matrix is owned by the model, dropping any alias the old one had.
    pub fn replace(&mut self, kind: MatrixKind, m: DMatrix<f64>) -> ModelResult<()> {
        {
            let a = self.a.load(MatrixKind::A)?;
            let b = self.b.load(MatrixKind::B)?;
            let c = self.c.load(MatrixKind::C)?;
            let d = self.d.load(MatrixKind::D)?;
            let (a, b, c, d) = match kind {
                MatrixKind::A => (&m, &*b, &*c, &*d),
                MatrixKind::B => (&*a, &m, &*c, &*d),
                MatrixKind::C => (&*a, &*b, &m, &*d),
                MatrixKind::D => (&*a, &*b, &*c, &m),
                MatrixKind::X | MatrixKind::U => return Err(not_a_system_matrix(kind)),
            };
            let dims = Dims::derive(a, b, c);
            check_dimensions(a, b, c, d, dims)?;
            check_state(&self.x, dims)?;
            check_names(&self.names, dims)?;
        }
        *self.cell_mut(kind)? = MatrixCell::Owned(m);
        Ok(())
    }

    /// Swap `C`, `D` and the output names together, as one validated update.
    pub(crate) fn replace_outputs(
        &mut self,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
        output_names: Option<NameList>,
    ) -> ModelResult<()> {
        {
            let a = self.a.load(MatrixKind::A)?;
            let b = self.b.load(MatrixKind::B)?;
            let dims = Dims::derive(&a, &b, &c);
            check_dimensions(&a, &b, &c, &d, dims)?;
            check_non_empty(dims)?;
            if let Some(list) = &output_names {
                check_name_count(SignalKind::Output, list.len(), dims)?;
            }
        }
        self.c = MatrixCell::Owned(c);
        self.d = MatrixCell::Owned(d);
        *self.names.slot(SignalKind::Output) = output_names;
        Ok(())
    }

    /// Edit a copy of one matrix in place and commit it if it still validates.
    pub fn update_matrix<F>(&mut self, kind: MatrixKind, edit: F) -> ModelResult<()>
    where
        F: FnOnce(&mut DMatrix<f64>),
    {
        let mut m = self.matrix(kind)?.clone();
        edit(&mut m);
        self.replace(kind, m)
    }

    // ---- state ----

    /// Current state vector.
    pub fn state(&self) -> &DVector<f64> {
        &self.x
    }

    pub fn set_state(&mut self, x: DVector<f64>) -> ModelResult<()> {
        check_state(&x, self.dims())?;
        self.x = x;
        Ok(())
    }

    // ---- sampling ----

    pub fn sampling_period(&self) -> SamplePeriod {
        self.ts
    }

    pub fn set_sampling_period(&mut self, ts: SamplePeriod) {
        self.ts = ts;
    }

    // ---- names ----

    pub fn names(&self) -> &SignalNames {
        &self.names
    }

    pub fn state_names(&self) -> Option<&NameList> {
        self.names.states()
    }

    pub fn input_names(&self) -> Option<&NameList> {
        self.names.inputs()
    }

    pub fn output_names(&self) -> Option<&NameList> {
        self.names.outputs()
    }

    /// Name every signal of one category. The list length must match exactly.
    pub fn set_names<I, S>(&mut self, kind: SignalKind, names: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = NameList::new(names)?;
        self.set_name_list(kind, Some(list))
    }

    pub fn set_state_names<I, S>(&mut self, names: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_names(SignalKind::State, names)
    }

    pub fn set_input_names<I, S>(&mut self, names: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_names(SignalKind::Input, names)
    }

    pub fn set_output_names<I, S>(&mut self, names: I) -> ModelResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_names(SignalKind::Output, names)
    }

    /// Set or clear a whole name list.
    pub fn set_name_list(&mut self, kind: SignalKind, list: Option<NameList>) -> ModelResult<()> {
        if let Some(list) = &list {
            check_name_count(kind, list.len(), self.dims())?;
        }
        *self.names.slot(kind) = list;
        Ok(())
    }

    pub fn clear_names(&mut self, kind: SignalKind) {
        *self.names.slot(kind) = None;
    }

    /// Position of a named signal.
    ///
    /// Fails with `NotSupported` if the category is unnamed and with
    /// `NotFound` if the name is unknown.
    pub fn index_of(&self, kind: SignalKind, name: &str) -> ModelResult<usize> {
        let list = self.names.get(kind).ok_or_else(|| {
            ModelError::not_supported(format!("model has no {kind} names"))
        })?;
        list.position(name).ok_or_else(|| ModelError::NotFound {
            name: name.to_string(),
        })
    }

    // ---- comparison ----

    /// Compare matrices, sampling period and names within `tol`. State is ignored.
    pub fn approx_eq(&self, other: &DiscreteStateSpace, tol: Tolerances) -> bool {
        nearly_equal(self.ts.seconds(), other.ts.seconds(), tol)
            && self.names == other.names
            && matrices_nearly_equal(&self.a.get(), &other.a.get(), tol)
            && matrices_nearly_equal(&self.b.get(), &other.b.get(), tol)
            && matrices_nearly_equal(&self.c.get(), &other.c.get(), tol)
            && matrices_nearly_equal(&self.d.get(), &other.d.get(), tol)
    }

    /// Assemble a model from freshly computed parts.
    ///
    /// Used by the composition operators; every part is validated again here
    /// before the model exists.
    pub(crate) fn from_parts(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
        x: DVector<f64>,
        ts: SamplePeriod,
        names: SignalNames,
    ) -> ModelResult<Self> {
        let mut model = Self::new(a, b, c, d)?;
        let dims = model.dims();
        check_state(&x, dims)?;
        check_names(&names, dims)?;
        model.x = x;
        model.ts = ts;
        model.names = names;
        debug!(
            states = dims.states,
            inputs = dims.inputs,
            outputs = dims.outputs,
            "assembled state-space model"
        );
        Ok(model)
    }
}

fn not_a_system_matrix(kind: MatrixKind) -> ModelError {
    ModelError::invalid_arg(format!("{kind} is not a system matrix"))
}

impl fmt::Debug for DiscreteStateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscreteStateSpace")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("d", &self.d)
            .field("x", &self.x)
            .field("ts", &self.ts)
            .field("names", &self.names)
            .finish()
    }
}

impl fmt::Display for DiscreteStateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DiscreteStateSpace(states={}, inputs={}, outputs={}, ts={})",
            self.n_states(),
            self.n_inputs(),
            self.n_outputs(),
            self.ts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::share;
    use ss_core::Axis;

    fn m(rows: usize, cols: usize, data: &[f64]) -> DMatrix<f64> {
        DMatrix::from_row_slice(rows, cols, data)
    }

    fn two_state() -> DiscreteStateSpace {
        DiscreteStateSpace::new(
            m(2, 2, &[0.5, 0.1, 0.0, 0.9]),
            m(2, 1, &[1.0, 0.0]),
            m(1, 2, &[1.0, 1.0]),
            m(1, 1, &[0.0]),
        )
        .unwrap()
    }

    #[test]
    fn scaffold_layout() {
        let sys = DiscreteStateSpace::scaffold(3, 2, 1).unwrap();
        assert_eq!(sys.dims(), Dims { states: 3, inputs: 2, outputs: 1 });
        assert_eq!(*sys.a(), identity(3, 3));
        assert_eq!(*sys.b(), identity(3, 2));
        assert_eq!(*sys.c(), ones(1, 3));
        assert_eq!(*sys.d(), zeros(1, 2));
        assert_eq!(sys.state(), &DVector::zeros(3));
        assert_eq!(sys.sampling_period().seconds(), 1.0);
    }

    #[test]
    fn scaffold_rejects_zero_dimension() {
        assert!(matches!(
            DiscreteStateSpace::scaffold(0, 1, 1),
            Err(ModelError::InvalidArg { .. })
        ));
        assert!(DiscreteStateSpace::scaffold(2, 1, 0).is_err());
    }

    #[test]
    fn new_validates_shapes() {
        let err = DiscreteStateSpace::new(zeros(2, 2), zeros(3, 1), zeros(1, 2), zeros(1, 1))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                matrix: MatrixKind::B,
                axis: Axis::Rows,
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn new_rejects_empty_model() {
        let err =
            DiscreteStateSpace::new(zeros(0, 0), zeros(0, 1), zeros(1, 0), zeros(1, 1)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArg { .. }));
    }

    #[test]
    fn single_matrix_convenience() {
        let sys = DiscreteStateSpace::from_single_matrix(m(1, 1, &[0.7]), Ownership::Owned)
            .unwrap();
        assert_eq!(sys.dims(), Dims { states: 1, inputs: 1, outputs: 1 });
        assert_eq!(sys.b()[(0, 0)], 1.0);
        assert_eq!(sys.d()[(0, 0)], 0.0);

        let err = DiscreteStateSpace::from_single_matrix(identity(2, 2), Ownership::Owned)
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                matrix: MatrixKind::B,
                ..
            }
        ));
    }

    #[test]
    fn set_a_rejects_resize_and_keeps_old_value() {
        let mut sys = two_state();
        let before = sys.a().clone();
        let err = sys.set_a(identity(3, 3)).unwrap_err();
        assert!(matches!(err, ModelError::DimensionMismatch { .. }));
        assert_eq!(*sys.a(), before);

        sys.set_a(identity(2, 2)).unwrap();
        assert_eq!(*sys.a(), identity(2, 2));
    }

    #[test]
    fn set_c_can_change_output_count_only_with_d() {
        let mut sys = two_state();
        // C with two outputs disagrees with the 1-row D
        assert!(sys.set_c(ones(2, 2)).is_err());
        assert_eq!(sys.n_outputs(), 1);
    }

    #[test]
    fn replace_rejects_non_matrix_kind() {
        let mut sys = two_state();
        assert!(sys.replace(MatrixKind::X, zeros(2, 1)).is_err());
    }

    #[test]
    fn update_matrix_edits_copy() {
        let mut sys = two_state();
        sys.update_matrix(MatrixKind::D, |d| d[(0, 0)] = 3.0).unwrap();
        assert_eq!(sys.d()[(0, 0)], 3.0);
    }

    #[test]
    fn set_state_checks_length() {
        let mut sys = two_state();
        assert!(sys.set_state(DVector::from_element(3, 1.0)).is_err());
        assert_eq!(sys.state(), &DVector::zeros(2));
        sys.set_state(DVector::from_element(2, 1.0)).unwrap();
        assert_eq!(sys.state()[1], 1.0);
    }

    #[test]
    fn names_must_match_dimension() {
        let mut sys = two_state();
        assert!(sys.set_state_names(["x1"]).is_err());
        assert!(sys.state_names().is_none());
        sys.set_state_names(["x1", "x2"]).unwrap();
        assert_eq!(sys.index_of(SignalKind::State, "x2").unwrap(), 1);
        assert!(matches!(
            sys.index_of(SignalKind::State, "x3"),
            Err(ModelError::NotFound { .. })
        ));
        assert!(matches!(
            sys.index_of(SignalKind::Input, "u"),
            Err(ModelError::NotSupported { .. })
        ));
        sys.clear_names(SignalKind::State);
        assert!(sys.state_names().is_none());
    }

    #[test]
    fn borrowed_matrices_observe_owner_writes() {
        let a = share(m(1, 1, &[0.5]));
        let b = share(m(1, 1, &[1.0]));
        let c = share(m(1, 1, &[1.0]));
        let d = share(m(1, 1, &[0.0]));
        let handles = (Some(&a), Some(&b), Some(&c), Some(&d));
        let sys = DiscreteStateSpace::from_shared(
            handles.0, handles.1, handles.2, handles.3, Ownership::Borrowed,
        )
        .unwrap();
        let owned = DiscreteStateSpace::from_shared(
            handles.0, handles.1, handles.2, handles.3, Ownership::Owned,
        )
        .unwrap();
        a.borrow_mut()[(0, 0)] = 0.25;
        assert_eq!(sys.a()[(0, 0)], 0.25);
        assert_eq!(owned.a()[(0, 0)], 0.5);
        assert_eq!(sys.ownership(MatrixKind::A).unwrap(), Ownership::Borrowed);
        assert_eq!(owned.ownership(MatrixKind::A).unwrap(), Ownership::Owned);
    }

    #[test]
    fn copy_without_state_resets_state() {
        let mut sys = two_state().with_sampling_period(SamplePeriod::new(0.1).unwrap());
        sys.set_state(DVector::from_element(2, 4.0)).unwrap();
        sys.set_output_names(["y"]).unwrap();

        let fresh = DiscreteStateSpace::copy_from(&sys, false).unwrap();
        assert!(fresh.approx_eq(&sys, Tolerances::exact()));
        assert_eq!(fresh.state(), &DVector::zeros(2));

        let full = DiscreteStateSpace::copy_from(&sys, true).unwrap();
        assert_eq!(full.state(), sys.state());
    }

    #[test]
    fn from_shared_reports_missing_handle() {
        let unit = share(m(1, 1, &[1.0]));
        let err = DiscreteStateSpace::from_shared(
            Some(&unit),
            Some(&unit),
            None,
            Some(&unit),
            Ownership::Owned,
        )
        .unwrap_err();
        assert_eq!(err, ModelError::NullArgument { what: "matrix C" });
    }

    #[test]
    fn single_matrix_reports_locked_handle() {
        let a = share(m(1, 1, &[0.5]));
        let _guard = a.borrow_mut();
        let err = DiscreteStateSpace::from_single_matrix(&a, Ownership::Borrowed).unwrap_err();
        assert!(matches!(err, ModelError::NotSupported { .. }));
    }

    #[test]
    fn copy_of_resized_borrowed_model_fails() {
        let a = share(m(1, 1, &[0.5]));
        let unit = share(m(1, 1, &[1.0]));
        let sys = DiscreteStateSpace::from_shared(
            Some(&a),
            Some(&unit),
            Some(&unit),
            Some(&unit),
            Ownership::Borrowed,
        )
        .unwrap();
        *a.borrow_mut() = identity(2, 2);
        let err = DiscreteStateSpace::copy_from(&sys, false).unwrap_err();
        assert!(matches!(err, ModelError::DimensionMismatch { .. }));
    }

    #[test]
    fn display_summarizes_dimensions() {
        let sys = two_state();
        assert_eq!(
            sys.to_string(),
            "DiscreteStateSpace(states=2, inputs=1, outputs=1, ts=1 s)"
        );
    }
}
