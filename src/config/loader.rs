//! Configuration file discovery and loading.

use crate::config::schema::{ConfigOverrides, SetupConfig};
use crate::error::{Result, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding Memorai settings, both per-project and per-user.
pub const CONFIG_DIR: &str = ".memorai";

/// File name of the setup settings.
pub const CONFIG_FILE: &str = "setup.yml";

/// Find the settings file to use.
///
/// An explicit path must exist. Otherwise the project file
/// (`<project>/.memorai/setup.yml`) wins over the user file
/// (`~/.memorai/setup.yml`); `None` means defaults only.
pub fn discover(explicit: Option<&Path>, project_root: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(Some(path.to_path_buf()));
        }
        return Err(SetupError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let project = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
    if project.is_file() {
        return Ok(Some(project));
    }

    Ok(find_user_global())
}

fn find_user_global() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse a settings file.
pub fn load_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|e| SetupError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the effective configuration: defaults, then file, then overrides.
pub fn load_config(
    explicit: Option<&Path>,
    project_root: &Path,
    overrides: &ConfigOverrides,
) -> Result<SetupConfig> {
    let mut config = match discover(explicit, project_root)? {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            load_file(&path)?
        }
        None => SetupConfig::default(),
    };
    config.apply(overrides);
    Ok(config)
}
