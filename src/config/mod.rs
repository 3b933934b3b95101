//! Configuration: YAML file values with command-line overrides

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    SyncConfig, SyncOverrides, DEFAULT_BRANCH, DEFAULT_LANG, DEFAULT_RAW_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
