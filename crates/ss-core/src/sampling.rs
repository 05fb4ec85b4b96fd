//! Sampling period for discrete-time models.
//!
//! Every discrete model advances one sample per step. Two models can only be
//! cascaded or combined when they share the exact same period.

use core::fmt;

use crate::error::{ModelError, ModelResult};
use crate::numeric::ensure_finite;
use crate::units::{Frequency, Time, to_hertz, to_seconds};

/// Sample period in seconds, always strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SamplePeriod(f64);

impl SamplePeriod {
    /// Create a new sample period.
    ///
    /// # Arguments
    ///
    /// * `dt` - Sample period in seconds (must be positive and finite)
    pub fn new(dt: f64) -> ModelResult<Self> {
        let dt = ensure_finite(dt, "sampling period")?;
        if dt <= 0.0 {
            return Err(ModelError::invalid_arg(format!(
                "sampling period must be positive, got {dt}"
            )));
        }
        Ok(Self(dt))
    }

    /// Create a sample period from a frequency in Hz.
    pub fn from_frequency(freq_hz: f64) -> ModelResult<Self> {
        let freq_hz = ensure_finite(freq_hz, "sampling frequency")?;
        if freq_hz <= 0.0 {
            return Err(ModelError::invalid_arg(format!(
                "sampling frequency must be positive, got {freq_hz}"
            )));
        }
        Self::new(1.0 / freq_hz)
    }

    /// Create a sample period from a `uom` time quantity.
    pub fn from_time(dt: Time) -> ModelResult<Self> {
        Self::new(to_seconds(dt))
    }

    /// Create a sample period from a `uom` frequency quantity.
    pub fn from_rate(rate: Frequency) -> ModelResult<Self> {
        Self::from_frequency(to_hertz(rate))
    }

    /// Period in seconds.
    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Period as a `uom` time quantity.
    pub fn as_time(&self) -> Time {
        crate::units::s(self.0)
    }

    /// Sample frequency in Hz.
    pub fn frequency(&self) -> f64 {
        1.0 / self.0
    }

    /// True when both periods are bit-for-bit the same value.
    pub fn matches(&self, other: &SamplePeriod) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Default for SamplePeriod {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for SamplePeriod {
    type Error = ModelError;

    fn try_from(dt: f64) -> ModelResult<Self> {
        Self::new(dt)
    }
}

impl From<SamplePeriod> for f64 {
    fn from(ts: SamplePeriod) -> Self {
        ts.0
    }
}

impl fmt::Display for SamplePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_period_creation() {
        let ts = SamplePeriod::new(0.1).unwrap();
        assert_eq!(ts.seconds(), 0.1);
        assert!((ts.frequency() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn sample_period_from_frequency() {
        let ts = SamplePeriod::from_frequency(10.0).unwrap();
        assert!((ts.seconds() - 0.1).abs() < 1e-10);
    }

    #[test]
    fn sample_period_from_time_quantity() {
        let ts = SamplePeriod::from_time(crate::units::s(0.25)).unwrap();
        assert_eq!(ts.seconds(), 0.25);
        assert!((to_seconds(ts.as_time()) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert!(matches!(
            SamplePeriod::new(0.0),
            Err(ModelError::InvalidArg { .. })
        ));
        assert!(matches!(
            SamplePeriod::new(-1.0),
            Err(ModelError::InvalidArg { .. })
        ));
        assert!(matches!(
            SamplePeriod::new(f64::NAN),
            Err(ModelError::NonFinite { .. })
        ));
        assert!(SamplePeriod::from_frequency(0.0).is_err());
    }

    #[test]
    fn matches_is_exact() {
        let a = SamplePeriod::new(0.1).unwrap();
        let b = SamplePeriod::new(0.1).unwrap();
        let c = SamplePeriod::new(0.1 + f64::EPSILON).unwrap();
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn default_is_one_second() {
        assert_eq!(SamplePeriod::default().seconds(), 1.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positive_periods_are_kept(dt in 1e-9f64..1e6) {
            let ts = SamplePeriod::new(dt).unwrap();
            prop_assert_eq!(ts.seconds(), dt);
            prop_assert!(ts.matches(&SamplePeriod::new(dt).unwrap()));
        }

        #[test]
        fn non_positive_periods_are_rejected(dt in -1e6f64..=0.0) {
            prop_assert!(SamplePeriod::new(dt).is_err());
        }

        #[test]
        fn frequency_inverts_period(hz in 1e-3f64..1e6) {
            let ts = SamplePeriod::from_frequency(hz).unwrap();
            prop_assert!((ts.frequency() - hz).abs() <= 1e-9 * hz);
        }
    }
}
