//! Optional signal names for states, inputs and outputs.
//!
//! Each category is either fully named (one unique name per signal) or not
//! named at all.

use core::fmt;
use std::collections::HashSet;

use ss_core::{ModelError, ModelResult};

/// Signal category of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    State,
    Input,
    Output,
}

impl SignalKind {
    pub const ALL: [SignalKind; 3] = [SignalKind::State, SignalKind::Input, SignalKind::Output];
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::State => f.write_str("state"),
            SignalKind::Input => f.write_str("input"),
            SignalKind::Output => f.write_str("output"),
        }
    }
}

/// Ordered list of unique signal names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Create a name list, rejecting duplicates.
    pub fn new<I, S>(names: I) -> ModelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some(dup) = first_duplicate(&names) {
            return Err(ModelError::invalid_arg(format!("duplicate signal name '{dup}'")));
        }
        Ok(Self(names))
    }

    /// `<prefix>_0 .. <prefix>_{n-1}`.
    pub fn prefixed(prefix: &str, n: usize) -> Self {
        Self((0..n).map(|i| format!("{prefix}_{i}")).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Concatenate two lists. Fails with `NotSupported` when a name appears in both.
    pub(crate) fn concat(&self, other: &NameList) -> ModelResult<NameList> {
        let mut names = self.0.clone();
        names.extend(other.0.iter().cloned());
        match first_duplicate(&names) {
            Some(dup) => Err(ModelError::not_supported(format!(
                "signal name '{dup}' appears in both models"
            ))),
            None => Ok(NameList(names)),
        }
    }

    pub(crate) fn without(&self, index: usize) -> NameList {
        let mut names = self.0.clone();
        names.remove(index);
        NameList(names)
    }
}

impl TryFrom<Vec<String>> for NameList {
    type Error = ModelError;

    fn try_from(names: Vec<String>) -> ModelResult<Self> {
        Self::new(names)
    }
}

impl From<NameList> for Vec<String> {
    fn from(names: NameList) -> Self {
        names.0
    }
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .iter()
        .find(|n| !seen.insert(n.as_str()))
        .map(String::as_str)
}

/// Names attached to a model, one optional list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalNames {
    states: Option<NameList>,
    inputs: Option<NameList>,
    outputs: Option<NameList>,
}

impl SignalNames {
    pub fn get(&self, kind: SignalKind) -> Option<&NameList> {
        match kind {
            SignalKind::State => self.states.as_ref(),
            SignalKind::Input => self.inputs.as_ref(),
            SignalKind::Output => self.outputs.as_ref(),
        }
    }

    pub fn states(&self) -> Option<&NameList> {
        self.states.as_ref()
    }

    pub fn inputs(&self) -> Option<&NameList> {
        self.inputs.as_ref()
    }

    pub fn outputs(&self) -> Option<&NameList> {
        self.outputs.as_ref()
    }

    /// True when at least one category is named.
    pub fn any(&self) -> bool {
        SignalKind::ALL.iter().any(|&k| self.get(k).is_some())
    }

    pub(crate) fn slot(&mut self, kind: SignalKind) -> &mut Option<NameList> {
        match kind {
            SignalKind::State => &mut self.states,
            SignalKind::Input => &mut self.inputs,
            SignalKind::Output => &mut self.outputs,
        }
    }
}
