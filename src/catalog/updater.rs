//! Keeps the local sync script identical to the copy on the remote branch
//!
//! The remote copy is trusted as-is unless a SHA-256 digest is pinned in the
//! configuration. A replaced script only takes effect on its next launch.

use sha2::{Digest, Sha256};
use std::path::PathBuf;

use super::fetcher::Fetch;
use crate::io::write_atomic;
use crate::{Result, ScoutError};

/// Result of a self-update attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Local script replaced with the remote content
    Updated { digest: String },
    /// Local script already identical
    UpToDate,
    /// Remote script could not be fetched
    Unavailable,
    /// Remote script did not match the pinned digest
    Rejected { expected: String, actual: String },
    /// Self-update turned off
    Disabled,
}

pub struct SelfUpdater<'a> {
    fetcher: &'a dyn Fetch,
    url: String,
    local_path: PathBuf,
    pinned_digest: Option<String>,
    enabled: bool,
}

impl<'a> SelfUpdater<'a> {
    pub fn new(fetcher: &'a dyn Fetch, url: impl Into<String>, local_path: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            local_path: local_path.into(),
            pinned_digest: None,
            enabled: true,
        }
    }

    pub fn with_pinned_digest(mut self, digest: Option<String>) -> Self {
        self.pinned_digest = digest;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn update(&self) -> Result<UpdateOutcome> {
        if !self.enabled {
            return Ok(UpdateOutcome::Disabled);
        }

        let Some(remote) = self.fetcher.fetch_text(&self.url) else {
            return Ok(UpdateOutcome::Unavailable);
        };

        let digest = sha256_hex(remote.as_bytes());
        tracing::debug!("Remote sync script sha256:{}", digest);

        if let Some(expected) = &self.pinned_digest {
            if *expected != digest {
                tracing::warn!(
                    "Refusing sync script update: expected sha256:{}, got sha256:{}",
                    expected,
                    digest
                );
                return Ok(UpdateOutcome::Rejected {
                    expected: expected.clone(),
                    actual: digest,
                });
            }
        }

        let current = match std::fs::read(&self.local_path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(ScoutError::io(&self.local_path, e)),
        };

        if current.as_deref() == Some(remote.as_bytes()) {
            return Ok(UpdateOutcome::UpToDate);
        }

        write_atomic(&self.local_path, &remote)?;
        tracing::info!("Replaced {}", self.local_path.display());
        Ok(UpdateOutcome::Updated { digest })
    }
}

/// Lowercase hex SHA-256 of `bytes`
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
