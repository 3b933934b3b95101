use crate::model::{status_label, PatternRecord};

/// Render one record as a Markdown section
///
/// Only sections backed by non-empty data are emitted. The section always
/// ends with a horizontal rule.
pub fn render_pattern(pattern: &PatternRecord, lang: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}", pattern.title()));
    lines.push(String::new());

    let status = pattern.status();
    let tags = pattern.tags();
    let mut meta_parts = Vec::new();
    if !status.is_empty() {
        meta_parts.push(format!("**Status:** {}", status_label(status, lang)));
    }
    if !tags.is_empty() {
        meta_parts.push(format!("**Tags:** {}", tags.join(", ")));
    }
    if !meta_parts.is_empty() {
        lines.push(meta_parts.join(" | "));
        lines.push(String::new());
    }

    let original_url = pattern.original_url();
    if !original_url.is_empty() {
        lines.push(format!("**Source:** {original_url}"));
        lines.push(String::new());
    }

    push_prose(&mut lines, "Problem", &pattern.problem(lang));
    push_prose(&mut lines, "Solution", &pattern.solution(lang));
    push_bullets(&mut lines, "When to Use", &pattern.when_to_use(lang));
    push_bullets(&mut lines, "Pros", &pattern.pros(lang));
    push_bullets(&mut lines, "Cons", &pattern.cons(lang));
    push_fenced(&mut lines, "Diagram", "mermaid", pattern.mermaid_diagram());
    push_fenced(&mut lines, "Code Example", "python", pattern.code_example());

    lines.push("---".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// GitHub-style anchor for a pattern title
pub fn title_anchor(title: &str) -> String {
    title.to_lowercase().replace(' ', "-").replace('\'', "")
}

fn push_prose(lines: &mut Vec<String>, heading: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    lines.push(format!("### {heading}"));
    lines.push(text.to_string());
    lines.push(String::new());
}

fn push_bullets(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(format!("### {heading}"));
    lines.extend(items.iter().map(|item| format!("- {item}")));
    lines.push(String::new());
}

fn push_fenced(lines: &mut Vec<String>, heading: &str, info: &str, body: &str) {
    if body.is_empty() {
        return;
    }
    lines.push(format!("### {heading}"));
    lines.push(format!("```{info}"));
    lines.push(body.to_string());
    lines.push("```".to_string());
    lines.push(String::new());
}
