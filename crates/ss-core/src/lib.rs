//! ss-core: shared foundation for the state-space toolkit.
//!
//! Contains:
//! - error (the model error taxonomy shared by every crate)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom time quantities)
//! - sampling (validated sampling period)

pub mod error;
pub mod numeric;
pub mod sampling;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{Axis, MatrixKind, ModelError, ModelResult};
pub use numeric::*;
pub use sampling::SamplePeriod;
pub use units::*;
