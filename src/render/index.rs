use crate::model::{group_by_category, sorted_by_title, Category, PatternRecord};

/// Maximum summary length in the index tables, in characters
pub const SUMMARY_MAX_CHARS: usize = 80;

/// Render the global index document
///
/// Only canonical categories appear, in canonical order. Records in any
/// other category are counted in the total but not listed here.
pub fn render_index(patterns: &[PatternRecord], lang: &str) -> String {
    let groups = group_by_category(patterns);
    let present: Vec<(&Category, &Vec<&PatternRecord>)> = Category::CANONICAL
        .iter()
        .filter_map(|category| groups.get_key_value(category))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    lines.push("# AI Agent Design Patterns Index".to_string());
    lines.push(String::new());
    lines.push(format!("Total **{}** patterns available.", patterns.len()));
    lines.push(String::new());

    lines.push("## Table of Contents".to_string());
    for (category, records) in &present {
        lines.push(format!(
            "- [{}](#{}) ({})",
            category,
            category.slug(),
            records.len()
        ));
    }
    lines.push(String::new());

    for (category, records) in &present {
        lines.push(format!("## {category}"));
        lines.push(format!("<a name=\"{}\"></a>", category.slug()));
        lines.push(String::new());
        lines.push("| Pattern | Summary | Tags |".to_string());
        lines.push("|---------|---------|------|".to_string());

        for pattern in sorted_by_title(records.iter().copied()) {
            let summary = summarize(&pattern.problem(lang));
            let tags: Vec<&str> = pattern.tags().into_iter().take(3).collect();
            lines.push(format!(
                "| {} | {} | {} |",
                pattern.title(),
                summary,
                tags.join(", ")
            ));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Table-safe summary: truncated to 80 characters, pipes and newlines replaced
pub fn summarize(text: &str) -> String {
    let summary = if text.chars().count() > SUMMARY_MAX_CHARS {
        let head: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    };
    summary.replace('|', "/").replace('\n', " ")
}
