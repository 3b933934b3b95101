//! Filesystem layout and writes

pub mod paths;

pub use paths::{write_atomic, write_text, SkillPaths};
