//! Pattern catalog sync
//!
//! Mirrors the AI agent design pattern catalog published in the
//! `Gorita/pattern-scout` GitHub repository into a local skill directory.
//!
//! # Architecture
//!
//! ```text
//! raw.githubusercontent.com/Gorita/pattern-scout/<branch>/
//!     │
//!     ├── public/ai-manifest.json         ← Lists every pattern
//!     ├── src/data/patterns/<id>.json     ← Full pattern details
//!     └── scripts/pattern-scout/          ← SKILL.md + sync script
//!            │
//!            ▼
//!     pattern-scout
//!            │
//!            ▼
//!     <skill dir>/SKILL.md
//!     <skill dir>/scripts/sync_patterns.py
//!     <skill dir>/references/patterns-index.md
//!     <skill dir>/references/patterns/<category>.md
//!     <skill dir>/references/meta.json
//! ```

mod check;
mod fetcher;
mod loader;
mod repository;
mod sync;
mod updater;

pub use check::{check_version, CheckReport};
pub use fetcher::{Fetch, HttpFetcher};
pub use loader::{parse_manifest, CatalogLoader};
pub use repository::{
    RemoteRepository, MANIFEST_PATH, PATTERNS_PATH, REPOSITORY, SKILL_MD_PATH, SYNC_SCRIPT_PATH,
};
pub use sync::{SyncOptions, SyncReport, Synchronizer};
pub use updater::{sha256_hex, SelfUpdater, UpdateOutcome};
