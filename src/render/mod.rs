//! Markdown rendering for patterns, the global index and category documents

mod category;
mod index;
mod pattern;

pub use category::render_category;
pub use index::{render_index, summarize, SUMMARY_MAX_CHARS};
pub use pattern::{render_pattern, title_anchor};
