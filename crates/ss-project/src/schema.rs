//! Model file schema definitions.

use serde::{Deserialize, Serialize};

/// Row-major matrix: a list of equally long rows.
pub type RowList = Vec<Vec<f64>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelFile {
    /// Schema version. Files written before versioning omit it and read as 0.
    #[serde(default)]
    pub version: u32,
    pub name: String,
    #[serde(default = "default_sampling_period_s")]
    pub sampling_period_s: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<RowList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<RowList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<RowList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<RowList>,
    /// Initial state; zero when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "NamesDef::is_empty")]
    pub names: NamesDef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NamesDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<String>>,
}

impl NamesDef {
    pub fn is_empty(&self) -> bool {
        self.states.is_none() && self.inputs.is_none() && self.outputs.is_none()
    }
}

fn default_sampling_period_s() -> f64 {
    1.0
}
