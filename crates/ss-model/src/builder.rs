//! Incremental model builder with a single validation pass.

use nalgebra::DVector;
use ss_core::{ModelError, ModelResult, SamplePeriod};

use crate::model::DiscreteStateSpace;
use crate::names::{NameList, SignalKind};
use crate::storage::{MatrixSource, Ownership};

/// Collects matrices, names, state and sampling period, then validates them
/// together in [`StateSpaceBuilder::build`].
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use ss_model::StateSpaceBuilder;
///
/// let sys = StateSpaceBuilder::new()
///     .a(DMatrix::from_element(1, 1, 0.5))
///     .b(DMatrix::from_element(1, 1, 1.0))
///     .c(DMatrix::from_element(1, 1, 1.0))
///     .d(DMatrix::from_element(1, 1, 0.0))
///     .input_names(["u"])
///     .build()
///     .unwrap();
/// assert_eq!(sys.n_states(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StateSpaceBuilder {
    a: Option<MatrixSource>,
    b: Option<MatrixSource>,
    c: Option<MatrixSource>,
    d: Option<MatrixSource>,
    ownership: Ownership,
    ts: Option<SamplePeriod>,
    state: Option<DVector<f64>>,
    names: Vec<(SignalKind, Vec<String>)>,
}

impl StateSpaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(mut self, a: impl Into<MatrixSource>) -> Self {
        self.a = Some(a.into());
        self
    }

    pub fn b(mut self, b: impl Into<MatrixSource>) -> Self {
        self.b = Some(b.into());
        self
    }

    pub fn c(mut self, c: impl Into<MatrixSource>) -> Self {
        self.c = Some(c.into());
        self
    }

    pub fn d(mut self, d: impl Into<MatrixSource>) -> Self {
        self.d = Some(d.into());
        self
    }

    /// How shared handles passed to `a`..`d` are held. Defaults to `Owned`.
    pub fn ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn sampling_period(mut self, ts: SamplePeriod) -> Self {
        self.ts = Some(ts);
        self
    }

    /// Initial state; defaults to zero.
    pub fn state(mut self, x: DVector<f64>) -> Self {
        self.state = Some(x);
        self
    }

    pub fn names<I, S>(mut self, kind: SignalKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names
            .push((kind, names.into_iter().map(Into::into).collect()));
        self
    }

    pub fn state_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names(SignalKind::State, names)
    }

    pub fn input_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names(SignalKind::Input, names)
    }

    pub fn output_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names(SignalKind::Output, names)
    }

    /// Validate everything and produce the model.
    ///
    /// A matrix that was never supplied fails with `NullArgument`.
    pub fn build(self) -> ModelResult<DiscreteStateSpace> {
        let a = self.a.ok_or(ModelError::NullArgument { what: "matrix A" })?;
        let b = self.b.ok_or(ModelError::NullArgument { what: "matrix B" })?;
        let c = self.c.ok_or(ModelError::NullArgument { what: "matrix C" })?;
        let d = self.d.ok_or(ModelError::NullArgument { what: "matrix D" })?;

        let mut model = DiscreteStateSpace::from_sources(a, b, c, d, self.ownership)?;
        if let Some(ts) = self.ts {
            model.set_sampling_period(ts);
        }
        if let Some(x) = self.state {
            model.set_state(x)?;
        }
        for (kind, names) in self.names {
            model.set_name_list(kind, Some(NameList::new(names)?))?;
        }
        Ok(model)
    }
}
