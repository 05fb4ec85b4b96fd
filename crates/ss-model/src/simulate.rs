//! Time-stepped simulation.
//!
//! Each step produces `y = C·x + D·u` from the current state, then advances
//! `x <- A·x + B·u`. Simulation is stateful: the model keeps the final state,
//! so a later call resumes where the previous one stopped.

use nalgebra::DVector;
use ss_core::{Axis, MatrixKind, ModelError, ModelResult};
use tracing::trace;

use crate::model::DiscreteStateSpace;

/// One input sample handed to [`DiscreteStateSpace::calc_response`].
///
/// Optional samples let callers feed sequences with gaps; a missing sample
/// aborts the run with `NullInput`.
pub trait InputSample {
    fn as_input(&self) -> Option<&DVector<f64>>;
}

impl InputSample for DVector<f64> {
    fn as_input(&self) -> Option<&DVector<f64>> {
        Some(self)
    }
}

impl InputSample for &DVector<f64> {
    fn as_input(&self) -> Option<&DVector<f64>> {
        Some(*self)
    }
}

impl InputSample for Option<DVector<f64>> {
    fn as_input(&self) -> Option<&DVector<f64>> {
        self.as_ref()
    }
}

impl InputSample for Option<&DVector<f64>> {
    fn as_input(&self) -> Option<&DVector<f64>> {
        *self
    }
}

impl DiscreteStateSpace {
    /// Run the model over a sequence of inputs and collect the outputs.
    ///
    /// The output buffer is sized from the iterator's lower size hint. A
    /// missing or wrongly sized sample fails the whole call: no outputs are
    /// returned and the state is left as it was before the call.
    pub fn calc_response<I>(&mut self, inputs: I) -> ModelResult<Vec<DVector<f64>>>
    where
        I: IntoIterator,
        I::Item: InputSample,
    {
        let (outputs, x) = self.run(inputs)?;
        self.x = x;
        Ok(outputs)
    }

    /// Advance a single sample and return its output.
    pub fn step(&mut self, u: &DVector<f64>) -> ModelResult<DVector<f64>> {
        let (mut outputs, x) = self.run([u])?;
        self.x = x;
        outputs
            .pop()
            .ok_or(ModelError::NullInput { index: 0 })
    }

    fn run<I>(&self, inputs: I) -> ModelResult<(Vec<DVector<f64>>, DVector<f64>)>
    where
        I: IntoIterator,
        I::Item: InputSample,
    {
        let (a, b, c, d) = self.load_checked()?;
        let n_inputs = b.ncols();
        let iter = inputs.into_iter();
        let mut outputs = Vec::with_capacity(iter.size_hint().0);
        let mut x = self.x.clone();

        for (index, sample) in iter.enumerate() {
            let u = sample.as_input().ok_or(ModelError::NullInput { index })?;
            if u.len() != n_inputs {
                return Err(ModelError::DimensionMismatch {
                    matrix: MatrixKind::U,
                    axis: Axis::Rows,
                    expected: n_inputs,
                    actual: u.len(),
                });
            }
            let y = &*c * &x + &*d * u;
            x = &*a * &x + &*b * u;
            trace!(step = index, "advanced state");
            outputs.push(y);
        }
        Ok((outputs, x))
    }
}
