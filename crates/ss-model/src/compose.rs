//! Composition of state-space models.
//!
//! - [`combine`]: parallel, block-diagonal join of two uncoupled models
//! - [`link`]: series connection feeding the outputs of one model into the
//!   inputs of the next
//!
//! Both operators are pure: they read their operands and return a new model
//! whose state vector is `[x1; x2]`.

use nalgebra::DVector;
use ss_algebra::{BlockMatrix, block_diag};
use ss_core::{ModelError, ModelResult, SamplePeriod};
use tracing::debug;

use crate::model::DiscreteStateSpace;
use crate::names::{NameList, SignalKind, SignalNames};

/// Prefix for synthesized names of the first operand.
const FIRST_PREFIX: &str = "G1";
/// Prefix for synthesized names of the second operand.
const SECOND_PREFIX: &str = "G2";

/// Run `g1` and `g2` side by side with no signal coupling.
///
/// ```text
/// A = diag(A1, A2)   B = diag(B1, B2)
/// C = diag(C1, C2)   D = diag(D1, D2)
/// ```
///
/// Each name category must be named on both models or on neither. If any
/// category is named, every category of the result is named; categories
/// named on neither side get `G1_<i>` / `G2_<i>` names.
pub fn combine(g1: &DiscreteStateSpace, g2: &DiscreteStateSpace) -> ModelResult<DiscreteStateSpace> {
    for kind in SignalKind::ALL {
        let (n1, n2) = (g1.names().get(kind), g2.names().get(kind));
        if n1.is_some() != n2.is_some() {
            return Err(ModelError::not_supported(format!(
                "{kind} names are present on only one of the combined models"
            )));
        }
    }
    let ts = shared_period(g1, g2)?;

    let (a1, b1, c1, d1) = g1.load_checked()?;
    let (a2, b2, c2, d2) = g2.load_checked()?;
    let a = block_diag(&a1, &a2);
    let b = block_diag(&b1, &b2);
    let c = block_diag(&c1, &c2);
    let d = block_diag(&d1, &d2);

    let names = if g1.names().any() || g2.names().any() {
        let mut names = SignalNames::default();
        for kind in SignalKind::ALL {
            *names.slot(kind) = Some(joined_names(g1, g2, kind)?);
        }
        names
    } else {
        SignalNames::default()
    };

    debug!(
        left_states = a1.ncols(),
        right_states = a2.ncols(),
        "combining models in parallel"
    );
    DiscreteStateSpace::from_parts(a, b, c, d, stacked_state(g1, g2), ts, names)
}

/// Feed the outputs of `g1` into the inputs of `g2`.
///
/// ```text
/// A = [ A1,     0  ]   B = [ B1    ]
///     [ B2·C1,  A2 ]       [ B2·D1 ]
/// C = [ D2·C1,  C2 ]   D = [ D2·D1 ]
/// ```
///
/// The result takes its inputs from `g1` and its outputs from `g2`.
///
/// Checks, in order:
/// 1. `g1` output names and `g2` input names are both present or both absent
///    (`NotSupported`);
/// 2. present names agree element for element, and `g1.n_outputs == g2.n_inputs`
///    (`NotSupported`);
/// 3. identical sampling periods (`InvalidArg`).
pub fn link(g1: &DiscreteStateSpace, g2: &DiscreteStateSpace) -> ModelResult<DiscreteStateSpace> {
    match (g1.output_names(), g2.input_names()) {
        (Some(outputs), Some(inputs)) => {
            if outputs != inputs {
                return Err(ModelError::not_supported(
                    "output names of the upstream model differ from input names of the downstream model",
                ));
            }
        }
        (None, None) => {}
        _ => {
            return Err(ModelError::not_supported(
                "linked signals are named on only one side",
            ));
        }
    }
    if g1.n_outputs() != g2.n_inputs() {
        return Err(ModelError::not_supported(format!(
            "upstream model has {} outputs but downstream model has {} inputs",
            g1.n_outputs(),
            g2.n_inputs()
        )));
    }
    let ts = shared_period(g1, g2)?;

    let (a1, b1, c1, d1) = g1.load_checked()?;
    let (a2, b2, c2, d2) = g2.load_checked()?;
    let (n1, n2) = (a1.ncols(), a2.ncols());
    let (m1, p2) = (b1.ncols(), c2.nrows());

    let mut a = BlockMatrix::new(&[n1, n2], &[n1, n2]);
    a.place(0, 0, &a1)?;
    a.place(1, 0, &(&*b2 * &*c1))?;
    a.place(1, 1, &a2)?;

    let mut b = BlockMatrix::new(&[n1, n2], &[m1]);
    b.place(0, 0, &b1)?;
    b.place(1, 0, &(&*b2 * &*d1))?;

    let mut c = BlockMatrix::new(&[p2], &[n1, n2]);
    c.place(0, 0, &(&*d2 * &*c1))?;
    c.place(0, 1, &c2)?;

    let d = &*d2 * &*d1;

    let mut names = SignalNames::default();
    *names.slot(SignalKind::Input) = g1.input_names().cloned();
    *names.slot(SignalKind::Output) = g2.output_names().cloned();
    if g1.state_names().is_some() || g2.state_names().is_some() {
        *names.slot(SignalKind::State) = Some(joined_names(g1, g2, SignalKind::State)?);
    }

    debug!(
        upstream_states = n1,
        downstream_states = n2,
        linked_signals = c1.nrows(),
        "linking models in series"
    );
    DiscreteStateSpace::from_parts(
        a.into_matrix(),
        b.into_matrix(),
        c.into_matrix(),
        d,
        stacked_state(g1, g2),
        ts,
        names,
    )
}

impl DiscreteStateSpace {
    /// Method form of [`combine`].
    pub fn combine(&self, other: &DiscreteStateSpace) -> ModelResult<DiscreteStateSpace> {
        combine(self, other)
    }

    /// Method form of [`link`], with `self` upstream.
    pub fn link(&self, downstream: &DiscreteStateSpace) -> ModelResult<DiscreteStateSpace> {
        link(self, downstream)
    }
}

fn shared_period(g1: &DiscreteStateSpace, g2: &DiscreteStateSpace) -> ModelResult<SamplePeriod> {
    let (ts1, ts2) = (g1.sampling_period(), g2.sampling_period());
    if !ts1.matches(&ts2) {
        return Err(ModelError::invalid_arg(format!(
            "sampling periods differ: {ts1} vs {ts2}"
        )));
    }
    Ok(ts1)
}

fn stacked_state(g1: &DiscreteStateSpace, g2: &DiscreteStateSpace) -> DVector<f64> {
    let (x1, x2) = (g1.state(), g2.state());
    DVector::from_iterator(x1.len() + x2.len(), x1.iter().chain(x2.iter()).copied())
}

/// Concatenate one name category, synthesizing names for an unnamed side.
fn joined_names(
    g1: &DiscreteStateSpace,
    g2: &DiscreteStateSpace,
    kind: SignalKind,
) -> ModelResult<NameList> {
    let first = g1
        .names()
        .get(kind)
        .cloned()
        .unwrap_or_else(|| NameList::prefixed(FIRST_PREFIX, g1.dims().of(kind)));
    let second = g2
        .names()
        .get(kind)
        .cloned()
        .unwrap_or_else(|| NameList::prefixed(SECOND_PREFIX, g2.dims().of(kind)));
    first.concat(&second)
}
