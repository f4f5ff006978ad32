//! Content model structs for documents, navigation, and diagnostics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Author-declared difficulty of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Frontmatter metadata from markdown files
///
/// Every field is optional: title and description have body-level
/// extraction rules that take precedence, and the rest default to empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub difficulty: Option<String>,

    /// Curated slugs of related documents
    #[serde(default)]
    pub related: Vec<String>,
}

/// Per-document metadata block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMetadata {
    /// Estimated reading time in minutes, always >= 1
    pub reading_time: u32,

    /// File modification date (baked date when served from the fallback snapshot)
    pub last_updated: NaiveDate,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// The minimal addressable unit for listing and searching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Path-derived identity key, e.g. "design-principle/solid"
    pub slug: String,

    /// First path segment of the slug
    pub category: String,

    /// Display title
    pub title: String,

    /// One-line purpose statement
    pub description: String,

    pub metadata: DocMetadata,
}

/// A summary plus rendered body, TOC, and sequencing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullDocument {
    pub slug: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub metadata: DocMetadata,

    /// Rendered HTML body
    pub content: String,

    /// Heading-derived table of contents
    #[serde(default)]
    pub toc: Vec<TocNode>,

    /// Tags from frontmatter, order preserved
    #[serde(default)]
    pub tags: Vec<String>,

    /// Curated slugs of related documents
    #[serde(default)]
    pub related: Vec<String>,

    /// Neighboring slugs in corpus order; None at the boundaries.
    /// Recomputed against the full index on every fetch.
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl FullDocument {
    /// Project this document down to its summary fields
    pub fn to_summary(&self) -> DocumentSummary {
        DocumentSummary {
            slug: self.slug.clone(),
            category: self.category.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// One entry in a document's table of contents
///
/// Children are the headings that nest under this one: every following
/// heading with a strictly greater level, up to the next heading at this
/// level or lower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    /// Anchor id matching the rendered heading
    pub id: String,

    pub title: String,

    /// Heading level 1..6
    pub level: u32,

    #[serde(default)]
    pub children: Vec<TocNode>,
}

/// One curated navigation group (category -> articles)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationGroup {
    pub category: String,

    pub category_slug: String,

    #[serde(default)]
    pub description: Option<String>,

    pub items: Vec<NavItem>,
}

/// A single navigation entry, possibly with nested children
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,

    pub slug: String,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub children: Vec<NavItem>,

    #[serde(default)]
    pub is_external: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    #[default]
    Warning,
    Info,
}

/// A build/verification finding, surfaced by the CLI `verify` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable machine-readable code, e.g. "nav.missing-document"
    pub code: String,

    pub message: String,

    pub severity: DiagnosticSeverity,

    /// Slug the finding refers to, when applicable
    #[serde(default)]
    pub slug: Option<String>,
}
