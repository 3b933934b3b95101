use crate::config::SyncConfig;

/// Catalog repository on GitHub
pub const REPOSITORY: &str = "Gorita/pattern-scout";

/// Manifest listing every pattern
pub const MANIFEST_PATH: &str = "public/ai-manifest.json";

/// Directory holding one `<id>.json` detail document per pattern
pub const PATTERNS_PATH: &str = "src/data/patterns";

/// Instruction document for the skill
pub const SKILL_MD_PATH: &str = "scripts/pattern-scout/SKILL.md";

/// Sync script distributed alongside the skill
pub const SYNC_SCRIPT_PATH: &str = "scripts/pattern-scout/sync_patterns.py";

/// Raw-content URLs for one branch of the catalog repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    raw_base_url: String,
    branch: String,
}

impl RemoteRepository {
    pub fn new(raw_base_url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            raw_base_url: raw_base_url.into().trim_end_matches('/').to_string(),
            branch: branch.into(),
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.raw_base_url.clone(), config.branch.clone())
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// `<raw base>/<org>/<repo>/<branch>/<path>`
    pub fn file_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_base_url, REPOSITORY, self.branch, path
        )
    }

    pub fn manifest_url(&self) -> String {
        self.file_url(MANIFEST_PATH)
    }

    pub fn pattern_url(&self, id: &str) -> String {
        self.file_url(&format!("{PATTERNS_PATH}/{id}.json"))
    }

    pub fn skill_md_url(&self) -> String {
        self.file_url(SKILL_MD_PATH)
    }

    pub fn sync_script_url(&self) -> String {
        self.file_url(SYNC_SCRIPT_PATH)
    }
}
