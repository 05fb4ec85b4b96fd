//! Schema migration framework.

use crate::ProjectError;
use crate::schema::ModelFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut file: ModelFile) -> Result<ModelFile, ProjectError> {
    if file.version > LATEST_VERSION {
        return Err(ProjectError::Migration {
            what: format!(
                "Model file version {} is newer than supported version {}",
                file.version, LATEST_VERSION
            ),
        });
    }
    while file.version < LATEST_VERSION {
        file = migrate_one_version(file)?;
    }
    Ok(file)
}

fn migrate_one_version(file: ModelFile) -> Result<ModelFile, ProjectError> {
    match file.version {
        0 => migrate_v0_to_v1(file),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files predate the `version` key; their layout is otherwise the
/// same as version 1.
fn migrate_v0_to_v1(mut file: ModelFile) -> Result<ModelFile, ProjectError> {
    file.version = 1;
    Ok(file)
}
