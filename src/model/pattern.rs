//! Pattern records as delivered by the catalog
//!
//! Records are kept as the raw JSON object they arrived as. A degraded
//! record (manifest entry used because its detail document was unavailable)
//! therefore stays identical to the manifest entry, and unknown fields are
//! never lost. Typed accessors extract what rendering needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::category::{Category, UNCATEGORIZED};
use super::localized;

/// One design pattern, full detail document or manifest entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternRecord {
    fields: Map<String, Value>,
}

impl PatternRecord {
    /// Build a record from arbitrary JSON; only objects are records
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String field, `""` when missing or not a string
    pub fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    pub fn title(&self) -> &str {
        self.str_field("title")
    }

    /// Category name, `Uncategorized` when missing
    pub fn category_name(&self) -> &str {
        self.fields
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn category(&self) -> Category {
        Category::from_name(self.category_name())
    }

    pub fn status(&self) -> &str {
        self.str_field("status")
    }

    /// Tags in order; non-string entries are skipped
    pub fn tags(&self) -> Vec<&str> {
        self.fields
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn original_url(&self) -> &str {
        self.str_field("original_url")
    }

    pub fn mermaid_diagram(&self) -> &str {
        self.str_field("mermaid_diagram")
    }

    pub fn code_example(&self) -> &str {
        self.str_field("code_example")
    }

    pub fn problem(&self, lang: &str) -> String {
        localized::text(self.fields.get("problem"), lang)
    }

    pub fn solution(&self, lang: &str) -> String {
        localized::text(self.fields.get("solution"), lang)
    }

    pub fn when_to_use(&self, lang: &str) -> Vec<String> {
        localized::list(self.fields.get("when_to_use"), lang)
    }

    pub fn pros(&self, lang: &str) -> Vec<String> {
        localized::list(self.fields.get("pros"), lang)
    }

    pub fn cons(&self, lang: &str) -> Vec<String> {
        localized::list(self.fields.get("cons"), lang)
    }
}

/// Sort records by title (stable, code-point order)
pub fn sorted_by_title<'a, I>(records: I) -> Vec<&'a PatternRecord>
where
    I: IntoIterator<Item = &'a PatternRecord>,
{
    let mut sorted: Vec<&PatternRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| a.title().cmp(b.title()));
    sorted
}
