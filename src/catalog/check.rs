use super::fetcher::Fetch;
use super::loader::CatalogLoader;
use super::repository::RemoteRepository;
use crate::io::SkillPaths;
use crate::model::SyncMeta;
use crate::Result;

/// Local metadata next to the remote manifest size
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// `None` when the skill directory was never synced
    pub local: Option<SyncMeta>,
    pub remote_branch: String,
    pub remote_patterns: usize,
}

impl CheckReport {
    /// Local references came from the same branch and hold as many records
    pub fn is_current(&self) -> bool {
        self.local.as_ref().is_some_and(|meta| {
            meta.branch == self.remote_branch && meta.total_patterns == self.remote_patterns
        })
    }
}

/// Compare local metadata with the remote manifest; writes nothing
pub fn check_version(
    fetcher: &dyn Fetch,
    repo: &RemoteRepository,
    paths: &SkillPaths,
) -> Result<CheckReport> {
    let local = SyncMeta::load(&paths.meta_file())?;
    match &local {
        Some(meta) => {
            println!("📍 Local version:");
            println!("   Branch: {}", meta.branch);
            println!("   Patterns: {}", meta.total_patterns);
        }
        None => println!("📍 Local version: Not synced yet"),
    }

    let manifest = match CatalogLoader::new(fetcher, repo).fetch_manifest() {
        Ok(manifest) => manifest,
        Err(e) => {
            println!("❌ Failed to fetch manifest");
            return Err(e);
        }
    };
    println!("📍 Remote version ({}):", repo.branch());
    println!("   Patterns: {}", manifest.len());

    let report = CheckReport {
        local,
        remote_branch: repo.branch().to_string(),
        remote_patterns: manifest.len(),
    };

    if report.is_current() {
        println!("✅ Local references are up to date");
    } else {
        println!("⚠️  Local references differ from remote; run without --check to sync");
    }

    Ok(report)
}
