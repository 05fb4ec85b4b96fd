//! Analysis entry points not provided by this crate.
//!
//! Frequency response, impulse response, stability and pole/zero extraction
//! belong to an eigen-analysis layer outside this crate. The trait fixes
//! their signatures; every default method fails with `NotImplemented` so no
//! caller ever receives a placeholder value.

use nalgebra::{Complex, DMatrix, DVector};
use ss_core::{ModelError, ModelResult};

use crate::model::DiscreteStateSpace;

/// Frequency response of a MIMO model at one frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyPoint {
    /// Frequency in Hz.
    pub frequency_hz: f64,
    /// Gain per output/input pair (`n_outputs × n_inputs`).
    pub magnitude: DMatrix<f64>,
    /// Phase in radians per output/input pair.
    pub phase_rad: DMatrix<f64>,
}

pub trait SystemAnalysis {
    /// Bode response at the given frequencies (Hz).
    fn bode(&self, _frequencies_hz: &[f64]) -> ModelResult<Vec<FrequencyPoint>> {
        Err(ModelError::NotImplemented { what: "bode" })
    }

    /// Output sequence for a unit impulse on every input, `steps` samples long.
    fn impulse(&self, _steps: usize) -> ModelResult<Vec<DVector<f64>>> {
        Err(ModelError::NotImplemented { what: "impulse" })
    }

    /// True when every pole lies strictly inside the unit circle.
    fn is_stable(&self) -> ModelResult<bool> {
        Err(ModelError::NotImplemented { what: "is_stable" })
    }

    fn poles(&self) -> ModelResult<Vec<Complex<f64>>> {
        Err(ModelError::NotImplemented { what: "poles" })
    }

    fn zeros(&self) -> ModelResult<Vec<Complex<f64>>> {
        Err(ModelError::NotImplemented { what: "zeros" })
    }
}

impl SystemAnalysis for DiscreteStateSpace {}
