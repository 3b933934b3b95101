//! Catalog data model: records, categories, statuses and sync metadata

pub mod category;
pub mod localized;
pub mod meta;
pub mod pattern;
pub mod status;

pub use category::{category_slug, Category, UNCATEGORIZED};
pub use localized::{Localized, FALLBACK_LANG};
pub use meta::{group_by_category, CategoryGroups, SyncMeta, META_VERSION};
pub use pattern::{sorted_by_title, PatternRecord};
pub use status::status_label;
