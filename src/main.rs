//! pattern-scout: sync the AI agent design pattern catalog into a skill directory

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pattern_scout::{
    catalog::HttpFetcher,
    cli::commands::{check::CheckCommand, sync::SyncCommand, CommandHandler},
    cli::{Cli, LogLevel},
    config::ConfigLoader,
};

/// Logs go to stderr; stdout carries the status lines
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let mut config = ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply(&cli.overrides());
    config.validate().context("Invalid configuration")?;

    let fetcher = HttpFetcher::from_config(&config).context("Failed to build HTTP client")?;

    let command: Box<dyn CommandHandler> = if cli.check {
        Box::new(CheckCommand::new(fetcher, config))
    } else {
        Box::new(SyncCommand::new(fetcher, config, cli.quiet))
    };

    tracing::debug!("Running {} command", command.name());
    if let Err(e) = command.execute() {
        tracing::error!("{} failed: {}", command.name(), e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
