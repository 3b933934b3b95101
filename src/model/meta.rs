use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::category::Category;
use super::pattern::PatternRecord;
use crate::{Result, ScoutError};

/// Schema version written to `meta.json`
pub const META_VERSION: &str = "1.0.0";

/// Summary of the last successful sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncMeta {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub total_patterns: usize,
    /// Pattern count per category, in first-appearance order
    #[serde(default)]
    pub categories: IndexMap<String, usize>,
}

impl SyncMeta {
    pub fn new(branch: &str, total_patterns: usize, groups: &CategoryGroups<'_>) -> Self {
        Self {
            version: META_VERSION.to_string(),
            branch: branch.to_string(),
            total_patterns,
            categories: groups
                .iter()
                .map(|(category, records)| (category.name().to_string(), records.len()))
                .collect(),
        }
    }

    /// Load metadata from disk; `None` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| ScoutError::io(path, e))?;
        let meta = serde_json::from_str(&content)?;
        Ok(Some(meta))
    }

    /// Pretty-printed JSON, non-ASCII kept literal
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|e| ScoutError::io(path, e))
    }
}

/// Records partitioned by category, in order of first appearance
pub type CategoryGroups<'a> = IndexMap<Category, Vec<&'a PatternRecord>>;

pub fn group_by_category(records: &[PatternRecord]) -> CategoryGroups<'_> {
    let mut groups: CategoryGroups<'_> = IndexMap::new();
    for record in records {
        groups.entry(record.category()).or_default().push(record);
    }
    groups
}
