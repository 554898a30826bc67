//! Locating agent config files.
//!
//! Lookup order: an explicit `--config` path, then `.elizasign.yaml` in the
//! current directory or any parent, then `~/.elizasign/config.yaml`.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = ".elizasign.yaml";

/// Find `.elizasign.yaml` walking up the directory tree.
pub fn find_config_walking_up(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// The user-wide config path (`~/.elizasign/config.yaml`).
pub fn global_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".elizasign").join("config.yaml"))
}

/// Resolve which config file applies, if any.
///
/// An explicit path must exist. Otherwise the project file wins over the
/// user-wide one, and having neither is fine.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    if let Some(found) = find_config_walking_up(cwd) {
        return Ok(Some(found));
    }

    // No home directory is not an error here, there's just no global config.
    match global_config_path() {
        Ok(global) if global.is_file() => Ok(Some(global)),
        _ => Ok(None),
    }
}
