use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::types::SyncConfig;
use crate::{Result, ScoutError};

/// Configuration file name inside the platform config directory
const CONFIG_FILE: &str = "config.yaml";

/// Loads `SyncConfig` from YAML
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the configuration
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used when present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<SyncConfig> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from_path(&path),
                _ => Ok(SyncConfig::default()),
            },
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<SyncConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| ScoutError::io(path, e))?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<SyncConfig> {
        if content.trim().is_empty() {
            return Ok(SyncConfig::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// `<config dir>/pattern-scout/config.yaml`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pattern-scout").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}
