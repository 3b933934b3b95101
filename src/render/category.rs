use super::pattern::{render_pattern, title_anchor};
use crate::model::{sorted_by_title, Category, PatternRecord};

/// Render the detail document for one category
pub fn render_category(category: &Category, patterns: &[&PatternRecord], lang: &str) -> String {
    let sorted = sorted_by_title(patterns.iter().copied());

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("# {category}"));
    lines.push(String::new());
    lines.push(format!(
        "This category contains **{}** patterns.",
        patterns.len()
    ));
    lines.push(String::new());

    lines.push("## Table of Contents".to_string());
    for pattern in &sorted {
        let title = pattern.title();
        lines.push(format!("- [{}](#{})", title, title_anchor(title)));
    }
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    for pattern in &sorted {
        lines.push(render_pattern(pattern, lang));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_category_document() {
        let beta = PatternRecord::from_value(json!({
            "title": "Beta's Loop",
            "status": "emerging",
            "problem": {"en": "B problem"}
        }))
        .unwrap();
        let alpha = PatternRecord::from_value(json!({"title": "Alpha Step"})).unwrap();

        let rendered = render_category(&Category::FeedbackLoops, &[&beta, &alpha], "en");

        let expected = "\
# Feedback Loops

This category contains **2** patterns.

## Table of Contents
- [Alpha Step](#alpha-step)
- [Beta's Loop](#betas-loop)

---

## Alpha Step

---

## Beta's Loop

**Status:** Emerging

### Problem
B problem

---
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_other_category_heading() {
        let p = PatternRecord::from_value(json!({"title": "X"})).unwrap();
        let rendered = render_category(&Category::Other("Misc Ideas".to_string()), &[&p], "en");
        assert!(rendered.starts_with("# Misc Ideas\n\nThis category contains **1** patterns."));
    }
}
