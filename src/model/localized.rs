//! Language-aware access to bilingual catalog fields
//!
//! Catalog content is authored in Korean and English. A field may hold a
//! language-neutral value (`"problem": "..."`) or a mapping keyed by
//! language code (`"problem": {"en": "...", "ko": "..."}`). Korean is the
//! authoritative fallback when the requested language is missing.

use serde_json::{Map, Value};

/// Language used when the requested one is missing from a mapping
pub const FALLBACK_LANG: &str = "ko";

/// Tagged view over an optional field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Localized<'a> {
    /// Field missing or `null`
    Absent,
    /// Plain value, identical for every language
    Neutral(&'a Value),
    /// Mapping from language code to content
    ByLanguage(&'a Map<String, Value>),
}

impl<'a> Localized<'a> {
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Localized::Absent,
            Some(Value::Object(map)) => Localized::ByLanguage(map),
            Some(other) => Localized::Neutral(other),
        }
    }

    /// Text content in `lang`, falling back to Korean, then to `""`
    pub fn text(&self, lang: &str) -> String {
        match self {
            Localized::Absent => String::new(),
            Localized::Neutral(value) => display(value),
            Localized::ByLanguage(map) => select(map, lang).map(display).unwrap_or_default(),
        }
    }

    /// List content in `lang`, falling back to Korean, then to `[]`
    pub fn list(&self, lang: &str) -> Vec<String> {
        match self {
            Localized::Absent => Vec::new(),
            Localized::Neutral(Value::Array(items)) => items.iter().map(display).collect(),
            Localized::Neutral(_) => Vec::new(),
            Localized::ByLanguage(map) => match select(map, lang) {
                Some(Value::Array(items)) => items.iter().map(display).collect(),
                _ => Vec::new(),
            },
        }
    }
}

/// Shorthand for `Localized::from_value(value).text(lang)`
pub fn text(value: Option<&Value>, lang: &str) -> String {
    Localized::from_value(value).text(lang)
}

/// Shorthand for `Localized::from_value(value).list(lang)`
pub fn list(value: Option<&Value>, lang: &str) -> Vec<String> {
    Localized::from_value(value).list(lang)
}

fn select<'m>(map: &'m Map<String, Value>, lang: &str) -> Option<&'m Value> {
    map.get(lang).or_else(|| map.get(FALLBACK_LANG))
}

/// Display form of a JSON value: strings verbatim, `null` empty, the rest as JSON
pub(crate) fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
