use serde_json::Value;

use super::fetcher::Fetch;
use super::repository::RemoteRepository;
use crate::model::PatternRecord;
use crate::{Result, ScoutError};

/// Loads the manifest and per-pattern detail documents
pub struct CatalogLoader<'a> {
    fetcher: &'a dyn Fetch,
    repo: &'a RemoteRepository,
    verbose: bool,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(fetcher: &'a dyn Fetch, repo: &'a RemoteRepository) -> Self {
        Self {
            fetcher,
            repo,
            verbose: true,
        }
    }

    /// Print per-entry progress lines while fetching details
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Fetch and parse the manifest; unavailable, malformed or empty is an error
    pub fn fetch_manifest(&self) -> Result<Vec<PatternRecord>> {
        println!("📥 Fetching manifest from {} branch...", self.repo.branch());
        let url = self.repo.manifest_url();
        let content = self.fetcher.fetch_text(&url).ok_or_else(|| {
            ScoutError::ManifestUnavailable(format!("could not fetch {url}"))
        })?;

        let manifest = parse_manifest(&content)?;
        tracing::info!("Manifest lists {} patterns", manifest.len());
        Ok(manifest)
    }

    /// One record per manifest entry, in manifest order
    ///
    /// Any entry whose detail cannot be used is replaced by the entry itself.
    pub fn fetch_details(&self, manifest: &[PatternRecord]) -> Vec<PatternRecord> {
        let total = manifest.len();
        manifest
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let id = entry.id();
                if self.verbose {
                    println!("  [{}/{}] {}", i + 1, total, id.unwrap_or(""));
                }
                id.and_then(|id| self.fetch_detail(id))
                    .unwrap_or_else(|| entry.clone())
            })
            .collect()
    }

    fn fetch_detail(&self, id: &str) -> Option<PatternRecord> {
        let content = self.fetcher.fetch_text(&self.repo.pattern_url(id))?;
        match serde_json::from_str::<Value>(&content) {
            Ok(value) => {
                let record = PatternRecord::from_value(value);
                if record.is_none() {
                    tracing::warn!("Detail for '{}' is not a JSON object, using manifest entry", id);
                }
                record
            }
            Err(e) => {
                tracing::warn!("Invalid detail JSON for '{}': {}", id, e);
                None
            }
        }
    }
}

/// Parse manifest text into records
pub fn parse_manifest(content: &str) -> Result<Vec<PatternRecord>> {
    let manifest: Vec<PatternRecord> = serde_json::from_str(content)
        .map_err(|e| ScoutError::ManifestUnavailable(format!("invalid manifest JSON: {e}")))?;

    if manifest.is_empty() {
        return Err(ScoutError::ManifestUnavailable(
            "manifest is empty".to_string(),
        ));
    }

    Ok(manifest)
}
