use super::CommandHandler;
use crate::catalog::{Fetch, RemoteRepository, SyncOptions, Synchronizer};
use crate::config::SyncConfig;
use crate::io::SkillPaths;
use crate::Result;

/// Handler for a full sync
pub struct SyncCommand<F: Fetch> {
    pub fetcher: F,
    pub config: SyncConfig,
    pub quiet: bool,
}

impl<F: Fetch> CommandHandler for SyncCommand<F> {
    fn execute(&self) -> Result<()> {
        let synchronizer = Synchronizer::new(
            &self.fetcher,
            RemoteRepository::from_config(&self.config),
            SkillPaths::new(&self.config.skill_dir),
            SyncOptions::from_config(&self.config, self.quiet),
        );
        synchronizer.run()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}

impl<F: Fetch> SyncCommand<F> {
    pub fn new(fetcher: F, config: SyncConfig, quiet: bool) -> Self {
        Self {
            fetcher,
            config,
            quiet,
        }
    }
}
