use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_ICON: &str = "newspaper";

static CATEGORY_ICONS: [(&str, &str); 9] = [
    ("Tutorial", "book-open"),
    ("Tips & Tricks", "lightbulb"),
    ("Platform Updates", "rocket"),
    ("User Stories", "user-circle"),
    ("Technical", "code"),
    ("General", "newspaper"),
    ("LaTeX", "file-text"),
    ("Collaboration", "users"),
    ("Templates", "layout-template"),
];

pub fn category_icon(category: &str) -> &'static str {
    CATEGORY_ICONS.iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Used for both the summary card link and the section heading id.
pub fn category_anchor(category: &str) -> String {
    lazy_static! {
        static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    }
    let lower = category.to_lowercase();
    let dashed = WHITESPACE.replace_all(&lower, "-");
    format!("category-{}", dashed.replace('&', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons() {
        assert_eq!(category_icon("Tutorial"), "book-open");
        assert_eq!(category_icon("Tips & Tricks"), "lightbulb");
        assert_eq!(category_icon("Templates"), "layout-template");
        assert_eq!(category_icon("LaTeX"), "file-text");
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(category_icon("Release Notes"), DEFAULT_ICON);
        assert_eq!(category_icon("tutorial"), DEFAULT_ICON);
        assert_eq!(category_icon(""), DEFAULT_ICON);
    }

    #[test]
    fn test_anchor() {
        assert_eq!(category_anchor("Tutorial"), "category-tutorial");
        assert_eq!(category_anchor("Platform Updates"), "category-platform-updates");
        assert_eq!(category_anchor("Tips & Tricks"), "category-tips--tricks");
        assert_eq!(category_anchor("User \t Stories"), "category-user-stories");
    }
}
