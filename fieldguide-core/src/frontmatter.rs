//! Frontmatter parsing from markdown files.

use crate::models::Frontmatter;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n?(.*)$").unwrap())
}

/// Parse frontmatter from markdown content.
///
/// Returns a tuple of (frontmatter, markdown_body). A file without a
/// leading frontmatter fence yields `Frontmatter::default()` with the
/// full content as body; a fence with malformed YAML is an error, which
/// callers surface through the fallback path.
///
/// # Example
///
/// ```
/// use fieldguide_core::frontmatter::parse_frontmatter;
///
/// let content = "---\ntitle: Observer Pattern\ntags: [design]\n---\n# Observer Pattern\n";
///
/// let (fm, body) = parse_frontmatter(content).unwrap();
/// assert_eq!(fm.title.as_deref(), Some("Observer Pattern"));
/// assert!(body.trim().starts_with("# Observer Pattern"));
/// ```
pub fn parse_frontmatter(content: &str) -> Result<(Frontmatter, String), FrontmatterError> {
    let re = frontmatter_regex();

    if let Some(captures) = re.captures(content) {
        let yaml = captures.get(1).unwrap().as_str();
        let body = captures.get(2).unwrap().as_str();

        let frontmatter: Frontmatter = serde_yaml::from_str(yaml)?;
        Ok((frontmatter, body.to_string()))
    } else {
        Ok((Frontmatter::default(), content.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_frontmatter() {
        let content = r#"---
title: Observer Pattern
description: Decouple publishers from subscribers
difficulty: intermediate
tags:
  - design
  - behavioral
---

# Observer Pattern

Body text."#;

        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Observer Pattern"));
        assert_eq!(
            fm.description.as_deref(),
            Some("Decouple publishers from subscribers")
        );
        assert_eq!(fm.difficulty.as_deref(), Some("intermediate"));
        assert_eq!(fm.tags, vec!["design", "behavioral"]);
        assert!(body.contains("# Observer Pattern"));
        assert!(body.contains("Body text."));
    }

    #[test]
    fn test_parse_no_frontmatter() {
        let content = "# Just Content\n\nNo frontmatter here.";
        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(fm.tags.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_parse_frontmatter_with_related() {
        let content = r#"---
related:
  - design-principle/solid
  - design-pattern/strategy
---

Content."#;

        let (fm, _) = parse_frontmatter(content).unwrap();
        assert_eq!(
            fm.related,
            vec!["design-principle/solid", "design-pattern/strategy"]
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = "---\ntitle: T\nauthor: someone\n---\n\nContent.";
        let (fm, _) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: Test\nbad yaml: [unclosed\n---\n\nContent.";
        assert!(parse_frontmatter(content).is_err());
    }

    #[test]
    fn test_empty_body_after_fence() {
        let content = "---\ntitle: Only Frontmatter\n---\n";
        let (fm, body) = parse_frontmatter(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Only Frontmatter"));
        assert!(body.is_empty());
    }
}
