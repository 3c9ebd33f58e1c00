use crate::error::MkResult;
use crate::model::{ModelSet, UserSet};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Writes `value` as JSON, replacing whatever is already at `path`.
pub fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> MkResult<()> {
    let path = path.as_ref();
    if path.exists() {
        warn!("File {} exists, overwriting...", path.display());
    }
    let bytes = serde_json::to_vec(value)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> MkResult<T> {
    let content = fs::read(path)?;
    Ok(serde_json::from_slice(&content)?)
}

pub fn save_models<P: AsRef<Path>>(models: &ModelSet, path: P) -> MkResult<()> {
    info!(
        "Writing {} models to {}...",
        models.len(),
        path.as_ref().display()
    );
    write_json(models, path)
}

pub fn load_models<P: AsRef<Path>>(path: P) -> MkResult<ModelSet> {
    info!("Reading models from {}...", path.as_ref().display());
    read_json(path)
}

pub fn save_users<P: AsRef<Path>>(users: &UserSet, path: P) -> MkResult<()> {
    info!(
        "Writing {} users to {}...",
        users.len(),
        path.as_ref().display()
    );
    write_json(users, path)
}

pub fn load_users<P: AsRef<Path>>(path: P) -> MkResult<UserSet> {
    info!("Reading users from {}...", path.as_ref().display());
    read_json(path)
}
