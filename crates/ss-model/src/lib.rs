//! Discrete-time linear time-invariant state-space models.
//!
//! A model is the system
//!
//! ```text
//! x[k+1] = A·x[k] + B·u[k]
//! y[k]   = C·x[k] + D·u[k]
//! ```
//!
//! with optional names for its states, inputs and outputs.
//!
//! # Architecture
//!
//! - **Validation first**: every constructor and setter checks all shapes
//!   before committing, so a model is never left half-updated
//! - **Explicit ownership**: matrices are owned, or borrowed through shared
//!   handles when the caller asks for aliasing
//! - **Pure composition**: [`combine`] and [`link`] build new models and never
//!   touch their operands
//!
//! # Example
//!
//! ```
//! use nalgebra::{DMatrix, DVector};
//! use ss_model::DiscreteStateSpace;
//!
//! let scalar = |v: f64| DMatrix::from_element(1, 1, v);
//! let mut sys = DiscreteStateSpace::new(scalar(2.0), scalar(1.0), scalar(1.0), scalar(0.0)).unwrap();
//! let inputs = vec![DVector::from_element(1, 1.0); 3];
//! let outputs = sys.calc_response(&inputs).unwrap();
//! let y: Vec<f64> = outputs.iter().map(|y| y[0]).collect();
//! assert_eq!(y, vec![0.0, 1.0, 3.0]);
//! ```

pub mod analysis;
pub mod builder;
pub mod compose;
pub mod model;
pub mod names;
pub mod outputs;
pub mod simulate;
pub mod storage;
pub mod validate;

pub use analysis::{FrequencyPoint, SystemAnalysis};
pub use builder::StateSpaceBuilder;
pub use compose::{combine, link};
pub use model::DiscreteStateSpace;
pub use names::{NameList, SignalKind, SignalNames};
pub use simulate::InputSample;
pub use storage::{MatrixRef, MatrixSource, Ownership, SharedMatrix, share};
pub use validate::{Dims, check_dimensions};

pub use ss_core::{Axis, MatrixKind, ModelError, ModelResult, SamplePeriod};
