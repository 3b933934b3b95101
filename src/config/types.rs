use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::{Result, ScoutError};

/// Default branch to sync from
pub const DEFAULT_BRANCH: &str = "main";

/// Default raw-content host
pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default content language
pub const DEFAULT_LANG: &str = "en";

/// Sync configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Branch of the catalog repository to read
    pub branch: String,

    /// Raw-content host (a mirror or proxy may be substituted)
    pub raw_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Preferred content language
    pub lang: String,

    /// Disable TLS certificate verification
    pub insecure: bool,

    /// Keep the local sync script current
    pub self_update: bool,

    /// Pinned SHA-256 of the sync script; other downloads are refused
    pub self_update_sha256: Option<String>,

    /// Directory receiving SKILL.md, scripts/ and references/
    pub skill_dir: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            lang: DEFAULT_LANG.to_string(),
            insecure: false,
            self_update: true,
            self_update_sha256: None,
            skill_dir: PathBuf::from("."),
        }
    }
}

impl SyncConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pinned digest normalized to lowercase hex without a `sha256:` prefix
    pub fn pinned_digest(&self) -> Option<String> {
        self.self_update_sha256
            .as_deref()
            .map(|d| d.trim().trim_start_matches("sha256:").to_ascii_lowercase())
    }

    /// Apply command-line overrides on top of file values
    pub fn apply(&mut self, overrides: &SyncOverrides) {
        if let Some(branch) = &overrides.branch {
            self.branch = branch.clone();
        }
        if let Some(skill_dir) = &overrides.skill_dir {
            self.skill_dir = skill_dir.clone();
        }
        if let Some(lang) = &overrides.lang {
            self.lang = lang.clone();
        }
        if overrides.insecure {
            self.insecure = true;
        }
        if overrides.no_self_update {
            self.self_update = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.branch.trim().is_empty() {
            return Err(ScoutError::Config("branch must not be empty".to_string()));
        }

        if !self.raw_base_url.starts_with("http://") && !self.raw_base_url.starts_with("https://")
        {
            return Err(ScoutError::Config(format!(
                "raw_base_url must start with http:// or https://, got '{}'",
                self.raw_base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ScoutError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.lang.trim().is_empty() {
            return Err(ScoutError::Config("lang must not be empty".to_string()));
        }

        if let Some(digest) = self.pinned_digest() {
            if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ScoutError::Config(format!(
                    "self_update_sha256 must be 64 hex characters, got '{digest}'"
                )));
            }
        }

        Ok(())
    }
}

/// Values given on the command line; `None`/`false` leaves the file value
#[derive(Debug, Clone, Default)]
pub struct SyncOverrides {
    pub branch: Option<String>,
    pub skill_dir: Option<PathBuf>,
    pub lang: Option<String>,
    pub insecure: bool,
    pub no_self_update: bool,
}
