//! Local session store: who is using the calendar on this machine.

use crate::errors::{AppError, AppResult};
use crate::models::viewer::Viewer;
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> AppResult<Option<Viewer>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let viewer: Viewer = serde_yaml::from_str(&content)?;
    Ok(Some(viewer))
}

/// Current viewer, or `NoSession` when nobody is logged in.
pub fn require(path: &Path) -> AppResult<Viewer> {
    load(path)?.ok_or(AppError::NoSession)
}

pub fn save(path: &Path, viewer: &Viewer) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(viewer)?)?;
    Ok(())
}

/// Remove the session file. Returns false when there was none.
pub fn clear(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    Ok(true)
}
