use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::SyncOverrides;

/// Pattern Scout: keeps a local AI agent design pattern reference in sync
#[derive(Parser, Debug)]
#[command(name = "pattern-scout")]
#[command(version)]
#[command(about = "Sync the AI agent design pattern catalog into a local skill directory")]
#[command(
    long_about = "Fetches the pattern manifest and pattern details from the Gorita/pattern-scout repository and renders them as Markdown references under <skill dir>/references."
)]
pub struct Cli {
    /// GitHub branch to sync from [default: main]
    #[arg(long)]
    pub branch: Option<String>,

    /// Check version only
    #[arg(long)]
    pub check: bool,

    /// Minimal output
    #[arg(long)]
    pub quiet: bool,

    /// Skill directory to write into [default: .]
    #[arg(long)]
    pub skill_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Preferred content language [default: en]
    #[arg(long)]
    pub lang: Option<String>,

    /// Disable TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Do not replace the local sync script
    #[arg(long)]
    pub no_self_update: bool,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn overrides(&self) -> SyncOverrides {
        SyncOverrides {
            branch: self.branch.clone(),
            skill_dir: self.skill_dir.clone(),
            lang: self.lang.clone(),
            insecure: self.insecure,
            no_self_update: self.no_self_update,
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pattern-scout"]).unwrap();
        assert!(!cli.check);
        assert!(!cli.quiet);
        assert_eq!(cli.log_level, LogLevel::Warn);

        let overrides = cli.overrides();
        assert_eq!(overrides.branch, None);
        assert!(!overrides.no_self_update);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "pattern-scout",
            "--branch",
            "develop",
            "--check",
            "--quiet",
            "--skill-dir",
            "/tmp/skill",
            "--lang",
            "ko",
            "--insecure",
            "--no-self-update",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert!(cli.check);
        assert!(cli.quiet);
        assert_eq!(cli.log_level.to_filter_directive(), "debug");

        let overrides = cli.overrides();
        assert_eq!(overrides.branch.as_deref(), Some("develop"));
        assert_eq!(overrides.skill_dir, Some(PathBuf::from("/tmp/skill")));
        assert_eq!(overrides.lang.as_deref(), Some("ko"));
        assert!(overrides.insecure);
        assert!(overrides.no_self_update);
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["pattern-scout", "--log-level", "loud"]).is_err());
    }
}
