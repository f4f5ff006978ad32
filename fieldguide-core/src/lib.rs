//! # fieldguide-core
//!
//! Content resolution pipeline for the fieldguide documentation engine.
//!
//! This crate discovers markdown documents under a content root, extracts
//! structured metadata (title, description, tags, reading time, TOC,
//! last-modified), addresses documents by path-derived slugs, sequences
//! the corpus for prev/next browsing, answers substring search queries,
//! and falls back to a static snapshot whenever the file-system source
//! fails.

pub mod config;
pub mod fallback;
pub mod frontmatter;
pub mod index;
pub mod loader;
pub mod models;
pub mod navigation;
pub mod render;
pub mod scanner;
pub mod search;
pub mod slug;

pub use config::Config;
pub use fallback::FallbackStore;
pub use index::ContentIndex;
pub use loader::DocumentLoader;
pub use models::{
    Diagnostic, DiagnosticSeverity, Difficulty, DocMetadata, DocumentSummary, FullDocument,
    Frontmatter, NavItem, NavigationGroup, TocNode,
};
pub use navigation::validate_navigation;
pub use render::MarkdownRenderer;
pub use slug::{category_from_slug, slug_from_path, slugify};
