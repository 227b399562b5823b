use crate::config::{ChangelogConfig, SKIP_SECTION_NAME};

/// Changelog category derived from a pull request's labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// Named by the first category label, prefix stripped.
    Labeled(String),
    /// No recognized label.
    Default,
    /// Carries the skip label.
    Skip,
}

impl Category {
    /// Section key this category files into.
    pub fn section_name<'a>(&'a self, config: &'a ChangelogConfig) -> &'a str {
        match self {
            Category::Labeled(name) => name,
            Category::Default => &config.default_section,
            Category::Skip => SKIP_SECTION_NAME,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Category::Default)
    }
}

/// Resolve the category for labels in tracker order. The skip label wins
/// wherever it appears, otherwise the first prefixed label decides.
pub fn resolve_category(
    labels: &[String],
    config: &ChangelogConfig,
) -> Category {
    if labels.iter().any(|l| *l == config.skip_label) {
        return Category::Skip;
    }

    labels
        .iter()
        .find_map(|l| l.strip_prefix(config.category_label_prefix.as_str()))
        .map(|name| Category::Labeled(name.trim().to_string()))
        .unwrap_or(Category::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn first_prefixed_label_wins() {
        let config = ChangelogConfig::default();
        let category = resolve_category(
            &labels(&["area:scheduler", "type:bug-fix", "type:improvement"]),
            &config,
        );
        assert_eq!(category, Category::Labeled("bug-fix".into()));
    }

    #[test]
    fn strips_and_trims_prefix() {
        let config = ChangelogConfig::default();
        let category = resolve_category(&labels(&["type: Bug Fix "]), &config);
        assert_eq!(category, Category::Labeled("Bug Fix".into()));
    }

    #[test]
    fn skip_label_wins_regardless_of_order() {
        let config = ChangelogConfig::default();
        assert_eq!(
            resolve_category(&labels(&["type:bug", "changelog:skip"]), &config),
            Category::Skip
        );
        assert_eq!(
            resolve_category(&labels(&["changelog:skip", "type:bug"]), &config),
            Category::Skip
        );
    }

    #[test]
    fn falls_back_to_default() {
        let config = ChangelogConfig::default();
        let category =
            resolve_category(&labels(&["area:ui", "kind:feature"]), &config);
        assert!(category.is_default());
        assert_eq!(category.section_name(&config), "Uncategorized");
        assert!(resolve_category(&[], &config).is_default());
    }

    #[test]
    fn maps_categories_to_section_names() {
        let config = ChangelogConfig::default();
        assert_eq!(Category::Skip.section_name(&config), "(skip)");
        assert_eq!(
            Category::Labeled("bug".into()).section_name(&config),
            "bug"
        );
    }

    #[test]
    fn honors_configured_labels() {
        let config = ChangelogConfig {
            category_label_prefix: "changelog/".into(),
            skip_label: "no-changelog".into(),
            ..Default::default()
        };
        assert_eq!(
            resolve_category(&labels(&["changelog/Features"]), &config),
            Category::Labeled("Features".into())
        );
        assert_eq!(
            resolve_category(&labels(&["no-changelog"]), &config),
            Category::Skip
        );
        assert!(resolve_category(&labels(&["type:bug"]), &config).is_default());
    }
}
