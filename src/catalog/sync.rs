use indexmap::IndexMap;
use std::path::PathBuf;

use super::fetcher::Fetch;
use super::loader::CatalogLoader;
use super::repository::RemoteRepository;
use super::updater::{SelfUpdater, UpdateOutcome};
use crate::config::{SyncConfig, DEFAULT_LANG};
use crate::io::{write_text, SkillPaths};
use crate::model::{group_by_category, PatternRecord, SyncMeta};
use crate::render::{render_category, render_index};
use crate::{Result, ScoutError};

/// Run-level switches for a sync
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Preferred content language
    pub lang: String,
    /// Per-record progress lines
    pub verbose: bool,
    pub self_update: bool,
    pub pinned_digest: Option<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            verbose: true,
            self_update: true,
            pinned_digest: None,
        }
    }
}

impl SyncOptions {
    pub fn from_config(config: &SyncConfig, quiet: bool) -> Self {
        Self {
            lang: config.lang.clone(),
            verbose: !quiet,
            self_update: config.self_update,
            pinned_digest: config.pinned_digest(),
        }
    }
}

/// What a completed sync produced
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub self_update: UpdateOutcome,
    pub skill_md_updated: bool,
    pub total_patterns: usize,
    /// Record count per category, first-appearance order
    pub categories: IndexMap<String, usize>,
    /// Reference documents written, in write order
    pub written: Vec<PathBuf>,
}

/// Mirrors the remote catalog into a skill directory
pub struct Synchronizer<'a> {
    fetcher: &'a dyn Fetch,
    repo: RemoteRepository,
    paths: SkillPaths,
    options: SyncOptions,
}

impl<'a> Synchronizer<'a> {
    pub fn new(
        fetcher: &'a dyn Fetch,
        repo: RemoteRepository,
        paths: SkillPaths,
        options: SyncOptions,
    ) -> Self {
        Self {
            fetcher,
            repo,
            paths,
            options,
        }
    }

    /// Full sync; only an unusable manifest fails the run
    pub fn run(&self) -> Result<SyncReport> {
        self.paths.ensure_directories()?;

        let self_update = self.update_script()?;
        let skill_md_updated = self.update_skill_md()?;

        let loader = CatalogLoader::new(self.fetcher, &self.repo).verbose(self.options.verbose);
        let manifest = match loader.fetch_manifest() {
            Ok(manifest) => manifest,
            Err(e) => {
                println!("❌ Failed to fetch manifest");
                return Err(e);
            }
        };
        println!("✅ Fetched {} patterns from manifest", manifest.len());

        println!("📥 Fetching pattern details...");
        let patterns = loader.fetch_details(&manifest);
        println!("✅ Fetched {} pattern details", patterns.len());

        let mut written = Vec::new();
        written.push(self.write_index(&patterns)?);
        written.extend(self.write_categories(&patterns)?);

        let groups = group_by_category(&patterns);
        let meta = SyncMeta::new(self.repo.branch(), patterns.len(), &groups);
        let meta_path = self.paths.meta_file();
        meta.save(&meta_path)?;
        written.push(meta_path);

        println!();
        println!("🎉 Sync completed!");
        println!("   Total patterns: {}", meta.total_patterns);
        println!("   Categories: {}", meta.categories.len());
        println!("   Location: {}", self.paths.references_dir.display());

        tracing::info!(
            "Synced {} patterns from branch '{}'",
            meta.total_patterns,
            meta.branch
        );

        Ok(SyncReport {
            self_update,
            skill_md_updated,
            total_patterns: meta.total_patterns,
            categories: meta.categories,
            written,
        })
    }

    fn update_script(&self) -> Result<UpdateOutcome> {
        if self.options.self_update {
            println!("📥 Checking for script updates...");
        }

        let outcome = SelfUpdater::new(
            self.fetcher,
            self.repo.sync_script_url(),
            self.paths.sync_script(),
        )
        .with_pinned_digest(self.options.pinned_digest.clone())
        .enabled(self.options.self_update)
        .update()?;

        match &outcome {
            UpdateOutcome::Updated { .. } => {
                println!("  ✅ sync_patterns.py updated (changes will apply on next run)")
            }
            UpdateOutcome::UpToDate => println!("  ✅ sync_patterns.py is up to date"),
            UpdateOutcome::Unavailable => {
                println!("  ⚠️  Failed to fetch sync_patterns.py (keeping existing)")
            }
            UpdateOutcome::Rejected { .. } => {
                println!("  ⚠️  sync_patterns.py digest mismatch (keeping existing)")
            }
            UpdateOutcome::Disabled => tracing::debug!("Self-update disabled"),
        }

        Ok(outcome)
    }

    fn update_skill_md(&self) -> Result<bool> {
        println!("📥 Updating SKILL.md...");
        match self.fetcher.fetch_text(&self.repo.skill_md_url()) {
            Some(content) => {
                write_text(&self.paths.skill_md(), &content)?;
                println!("  ✅ SKILL.md updated");
                Ok(true)
            }
            None => {
                println!("  ⚠️  Failed to fetch SKILL.md (keeping existing)");
                Ok(false)
            }
        }
    }

    fn write_index(&self, patterns: &[PatternRecord]) -> Result<PathBuf> {
        println!("📝 Generating index markdown...");
        let path = self.paths.index_file();
        write_text(&path, &render_index(patterns, &self.options.lang))?;
        println!("  ✅ Saved: {}", path.display());
        Ok(path)
    }

    fn write_categories(&self, patterns: &[PatternRecord]) -> Result<Vec<PathBuf>> {
        println!("📝 Generating category markdowns...");
        let mut written = Vec::new();

        for (category, records) in group_by_category(patterns) {
            let path = match self.paths.category_file(&category) {
                Ok(path) => path,
                Err(ScoutError::Path(reason)) => {
                    tracing::warn!("Skipping category file: {}", reason);
                    println!("  ⚠️  Skipped: {reason} ({} patterns)", records.len());
                    continue;
                }
                Err(e) => return Err(e),
            };
            let content = render_category(&category, &records, &self.options.lang);
            write_text(&path, &content)?;
            println!("  ✅ Saved: {} ({} patterns)", path.display(), records.len());
            written.push(path);
        }

        Ok(written)
    }
}
