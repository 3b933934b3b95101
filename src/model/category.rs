use std::fmt;

/// Name used for records without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Pattern category
///
/// The canonical categories have a fixed order that drives the index
/// document. Any other name is carried as `Other`: it gets its own category
/// file but never shows up in ordered views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    OrchestrationControl,
    ContextMemory,
    FeedbackLoops,
    LearningAdaptation,
    ReliabilityEval,
    SecuritySafety,
    ToolUseEnvironment,
    UxCollaboration,
    Uncategorized,
    Other(String),
}

impl Category {
    /// Canonical categories in display order
    pub const CANONICAL: [Category; 9] = [
        Category::OrchestrationControl,
        Category::ContextMemory,
        Category::FeedbackLoops,
        Category::LearningAdaptation,
        Category::ReliabilityEval,
        Category::SecuritySafety,
        Category::ToolUseEnvironment,
        Category::UxCollaboration,
        Category::Uncategorized,
    ];

    pub fn from_name(name: &str) -> Self {
        Self::CANONICAL
            .iter()
            .find(|c| c.name() == name)
            .cloned()
            .unwrap_or_else(|| Category::Other(name.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Category::OrchestrationControl => "Orchestration & Control",
            Category::ContextMemory => "Context & Memory",
            Category::FeedbackLoops => "Feedback Loops",
            Category::LearningAdaptation => "Learning & Adaptation",
            Category::ReliabilityEval => "Reliability & Eval",
            Category::SecuritySafety => "Security & Safety",
            Category::ToolUseEnvironment => "Tool Use & Environment",
            Category::UxCollaboration => "UX & Collaboration",
            Category::Uncategorized => UNCATEGORIZED,
            Category::Other(name) => name,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    /// File name stem and anchor for this category
    pub fn slug(&self) -> String {
        category_slug(self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, `" & "` becomes `-`, remaining spaces become `-`
pub fn category_slug(name: &str) -> String {
    name.to_lowercase().replace(" & ", "-").replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs() {
        assert_eq!(
            Category::ToolUseEnvironment.slug(),
            "tool-use-environment"
        );
        assert_eq!(Category::UxCollaboration.slug(), "ux-collaboration");
        assert_eq!(Category::FeedbackLoops.slug(), "feedback-loops");
        assert_eq!(Category::Uncategorized.slug(), "uncategorized");
        assert_eq!(category_slug("Data & ML Ops"), "data-ml-ops");
    }

    #[test]
    fn test_from_name_round_trips_canonical() {
        for category in Category::CANONICAL.iter() {
            assert_eq!(&Category::from_name(category.name()), category);
            assert!(category.is_canonical());
        }
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let category = Category::from_name("Experimental Stuff");
        assert_eq!(category, Category::Other("Experimental Stuff".to_string()));
        assert!(!category.is_canonical());
        assert_eq!(category.name(), "Experimental Stuff");
        assert_eq!(category.slug(), "experimental-stuff");
    }

    #[test]
    fn test_name_matching_is_exact() {
        assert!(!Category::from_name("context & memory").is_canonical());
    }
}
