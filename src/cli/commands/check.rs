use super::CommandHandler;
use crate::catalog::{check_version, Fetch, RemoteRepository};
use crate::config::SyncConfig;
use crate::io::SkillPaths;
use crate::Result;

/// Handler for `--check`: compare local metadata with the remote manifest
pub struct CheckCommand<F: Fetch> {
    pub fetcher: F,
    pub config: SyncConfig,
}

impl<F: Fetch> CommandHandler for CheckCommand<F> {
    fn execute(&self) -> Result<()> {
        check_version(
            &self.fetcher,
            &RemoteRepository::from_config(&self.config),
            &SkillPaths::new(&self.config.skill_dir),
        )?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "check"
    }
}

impl<F: Fetch> CheckCommand<F> {
    pub fn new(fetcher: F, config: SyncConfig) -> Self {
        Self { fetcher, config }
    }
}
