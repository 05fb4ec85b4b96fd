//! ss-project: on-disk model file format.
//!
//! A model file stores the four system matrices as row lists together with
//! the sampling period, an optional initial state and optional signal names.
//! Files are migrated to the latest schema version and checked against the
//! model invariants on every load and save.

pub mod convert;
pub mod migrate;
pub mod schema;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;

use ss_core::ModelError;
use ss_model::DiscreteStateSpace;
use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Migrate and check a freshly parsed file.
fn accept(file: ModelFile) -> ProjectResult<ModelFile> {
    let file = migrate_to_latest(file)?;
    file.validate()?;
    debug!(name = %file.name, version = file.version, "loaded model file");
    Ok(file)
}

pub fn from_yaml_str(content: &str) -> ProjectResult<ModelFile> {
    accept(serde_yaml::from_str(content)?)
}

pub fn to_yaml_string(file: &ModelFile) -> ProjectResult<String> {
    file.validate()?;
    Ok(serde_yaml::to_string(file)?)
}

pub fn from_json_str(content: &str) -> ProjectResult<ModelFile> {
    accept(serde_json::from_str(content)?)
}

pub fn to_json_string(file: &ModelFile) -> ProjectResult<String> {
    file.validate()?;
    Ok(serde_json::to_string_pretty(file)?)
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<ModelFile> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &std::path::Path, file: &ModelFile) -> ProjectResult<()> {
    let content = to_yaml_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<ModelFile> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &std::path::Path, file: &ModelFile) -> ProjectResult<()> {
    let content = to_json_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a YAML model file straight into a model.
pub fn load_model_yaml(path: &std::path::Path) -> ProjectResult<DiscreteStateSpace> {
    Ok(load_yaml(path)?.to_model()?)
}

/// Save `model` as a YAML model file called `name`.
pub fn save_model_yaml(
    path: &std::path::Path,
    name: &str,
    model: &DiscreteStateSpace,
) -> ProjectResult<()> {
    save_yaml(path, &ModelFile::from_model(name, model))
}
