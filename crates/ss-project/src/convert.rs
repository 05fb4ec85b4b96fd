//! Conversion between model files and live models.

use ss_algebra::{Matrix, from_rows, to_rows, vector_from_slice};
use ss_core::{MatrixKind, ModelResult, SamplePeriod};
use ss_model::{DiscreteStateSpace, NameList, StateSpaceBuilder};

use crate::migrate::LATEST_VERSION;
use crate::schema::{ModelFile, NamesDef, RowList};

fn matrix(kind: MatrixKind, rows: Option<&RowList>) -> ModelResult<Option<Matrix>> {
    rows.map(|rows| from_rows(kind, rows)).transpose()
}

fn names(list: Option<&NameList>) -> Option<Vec<String>> {
    list.map(|list| list.as_slice().to_vec())
}

impl ModelFile {
    /// Build the model described by this file.
    ///
    /// A matrix absent from the file fails with `NullArgument`, a ragged row
    /// list with `DimensionMismatch`; everything else goes through the usual
    /// model validation.
    pub fn to_model(&self) -> ModelResult<DiscreteStateSpace> {
        let mut builder = StateSpaceBuilder::new()
            .sampling_period(SamplePeriod::new(self.sampling_period_s)?);
        if let Some(a) = matrix(MatrixKind::A, self.a.as_ref())? {
            builder = builder.a(a);
        }
        if let Some(b) = matrix(MatrixKind::B, self.b.as_ref())? {
            builder = builder.b(b);
        }
        if let Some(c) = matrix(MatrixKind::C, self.c.as_ref())? {
            builder = builder.c(c);
        }
        if let Some(d) = matrix(MatrixKind::D, self.d.as_ref())? {
            builder = builder.d(d);
        }
        if let Some(x) = &self.state {
            builder = builder.state(vector_from_slice(x));
        }
        if let Some(states) = &self.names.states {
            builder = builder.state_names(states.iter().cloned());
        }
        if let Some(inputs) = &self.names.inputs {
            builder = builder.input_names(inputs.iter().cloned());
        }
        if let Some(outputs) = &self.names.outputs {
            builder = builder.output_names(outputs.iter().cloned());
        }
        builder.build()
    }

    /// Describe `model` as a latest-version file. A zero state is omitted.
    pub fn from_model(name: &str, model: &DiscreteStateSpace) -> Self {
        let state = model.state();
        Self {
            version: LATEST_VERSION,
            name: name.to_string(),
            sampling_period_s: model.sampling_period().seconds(),
            a: Some(to_rows(&model.a())),
            b: Some(to_rows(&model.b())),
            c: Some(to_rows(&model.c())),
            d: Some(to_rows(&model.d())),
            state: state
                .iter()
                .any(|v| *v != 0.0)
                .then(|| state.iter().copied().collect()),
            names: NamesDef {
                states: names(model.state_names()),
                inputs: names(model.input_names()),
                outputs: names(model.output_names()),
            },
        }
    }

    /// Check that the file describes a valid model.
    pub fn validate(&self) -> ModelResult<()> {
        self.to_model().map(|_| ())
    }
}
