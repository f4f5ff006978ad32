//! Document loading: raw text -> rendered record with extracted metadata.

use crate::models::{Difficulty, DocMetadata, DocumentSummary, FullDocument};
use crate::render::{MarkdownRenderer, RenderError, RenderedDocument};
use crate::slug::{category_from_slug, slug_from_path};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Placeholder title when neither the body nor the frontmatter has one
const UNTITLED: &str = "Untitled";

static PURPOSE_REGEX: OnceLock<Regex> = OnceLock::new();

/// A purpose marker is a body line like `> **Purpose:** ...` — the
/// blockquote and the bold are both optional, the keyword is not.
fn purpose_regex() -> &'static Regex {
    PURPOSE_REGEX.get_or_init(|| {
        Regex::new(r"(?im)^\s*(?:>\s*)?(?:\*\*purpose:?\*\*:?|purpose:)\s*(.+?)\s*$").unwrap()
    })
}

/// Loads single documents from the corpus root
pub struct DocumentLoader {
    root: PathBuf,
    renderer: MarkdownRenderer,
}

impl DocumentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the summary record for one already-discovered file.
    pub fn load_summary(&self, path: &Path) -> Result<DocumentSummary, LoadError> {
        let raw = std::fs::read_to_string(path)?;
        let rendered = self.renderer.render(&raw)?;
        self.summary_from_rendered(path, &rendered)
    }

    /// Load the full record for a slug.
    ///
    /// Returns `Ok(None)` when the slug does not resolve to an existing
    /// file; I/O and parse failures propagate for the caller's fallback
    /// logic. `index_order` is the corpus-wide summary ordering used to
    /// assign prev/next; a slug absent from it gets neither.
    pub fn load_full(
        &self,
        slug: &str,
        index_order: &[DocumentSummary],
    ) -> Result<Option<FullDocument>, LoadError> {
        let Some(path) = self.resolve_slug(slug) else {
            return Ok(None);
        };

        let raw = std::fs::read_to_string(&path)?;
        let rendered = self.renderer.render(&raw)?;
        let summary = self.summary_from_rendered(&path, &rendered)?;

        let position = index_order.iter().position(|s| s.slug == summary.slug);
        let prev = position
            .and_then(|i| i.checked_sub(1))
            .map(|i| index_order[i].slug.clone());
        let next = position
            .and_then(|i| index_order.get(i + 1))
            .map(|s| s.slug.clone());

        Ok(Some(FullDocument {
            slug: summary.slug,
            category: summary.category,
            title: summary.title,
            description: summary.description,
            metadata: summary.metadata,
            content: rendered.html,
            toc: rendered.toc,
            tags: rendered.frontmatter.tags,
            related: rendered.frontmatter.related,
            prev,
            next,
        }))
    }

    /// Rejoin a slug against the corpus root, trying the known markdown
    /// extensions. Slugs that would escape the root never resolve.
    fn resolve_slug(&self, slug: &str) -> Option<PathBuf> {
        if slug.is_empty()
            || slug.starts_with('/')
            || slug.split('/').any(|segment| segment == "..")
        {
            return None;
        }

        ["md", "markdown"]
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", slug, ext)))
            .find(|candidate| candidate.is_file())
    }

    fn summary_from_rendered(
        &self,
        path: &Path,
        rendered: &RenderedDocument,
    ) -> Result<DocumentSummary, LoadError> {
        let slug = slug_from_path(&self.root, path);
        let category = category_from_slug(&slug).to_string();

        let metadata = DocMetadata {
            reading_time: rendered.reading_time,
            last_updated: last_updated(path)?,
            difficulty: rendered
                .frontmatter
                .difficulty
                .as_deref()
                .and_then(Difficulty::from_str),
        };

        Ok(DocumentSummary {
            slug,
            category,
            title: extract_title(rendered),
            description: extract_description(rendered),
            metadata,
        })
    }
}

/// Title precedence: first H1 in the body > frontmatter `title` > "Untitled"
fn extract_title(rendered: &RenderedDocument) -> String {
    if let Some(h1) = rendered.toc.iter().find(|node| node.level == 1) {
        return h1.title.clone();
    }

    rendered
        .frontmatter
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Description precedence: first purpose-marker line > frontmatter
/// `description` > empty string
fn extract_description(rendered: &RenderedDocument) -> String {
    if let Some(captures) = purpose_regex().captures(&rendered.body) {
        return captures[1].to_string();
    }

    rendered
        .frontmatter
        .description
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn last_updated(path: &Path) -> Result<chrono::NaiveDate, LoadError> {
    let modified = std::fs::metadata(path)?.modified()?;
    Ok(chrono::DateTime::<chrono::Utc>::from(modified).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_doc(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_title_prefers_body_h1() {
        let dir = tempdir().unwrap();
        let path = write_doc(
            dir.path(),
            "design-principle/solid.md",
            "---\ntitle: Frontmatter Title\n---\n# SOLID Principles\n\nBody.",
        );

        let loader = DocumentLoader::new(dir.path());
        let summary = loader.load_summary(&path).unwrap();
        assert_eq!(summary.title, "SOLID Principles");
        assert_eq!(summary.slug, "design-principle/solid");
        assert_eq!(summary.category, "design-principle");
    }

    #[test]
    fn test_title_falls_back_to_frontmatter_then_placeholder() {
        let dir = tempdir().unwrap();
        let with_fm = write_doc(
            dir.path(),
            "a/no-heading.md",
            "---\ntitle: From Frontmatter\n---\nJust prose.",
        );
        let bare = write_doc(dir.path(), "a/bare.md", "Just prose, nothing else.");

        let loader = DocumentLoader::new(dir.path());
        assert_eq!(
            loader.load_summary(&with_fm).unwrap().title,
            "From Frontmatter"
        );
        assert_eq!(loader.load_summary(&bare).unwrap().title, "Untitled");
    }

    #[test]
    fn test_description_prefers_purpose_marker() {
        let dir = tempdir().unwrap();
        let path = write_doc(
            dir.path(),
            "a/doc.md",
            "---\ndescription: From frontmatter\n---\n# T\n\n> **Purpose:** Explain the thing.\n",
        );

        let loader = DocumentLoader::new(dir.path());
        let summary = loader.load_summary(&path).unwrap();
        assert_eq!(summary.description, "Explain the thing.");
    }

    #[test]
    fn test_description_marker_variants() {
        let dir = tempdir().unwrap();
        let loader = DocumentLoader::new(dir.path());

        for (i, line) in [
            "Purpose: plain form",
            "> Purpose: quoted form",
            "**Purpose:** bold form",
            "> **purpose**: lowercase bold-outside form",
        ]
        .iter()
        .enumerate()
        {
            let path = write_doc(
                dir.path(),
                &format!("m/doc{}.md", i),
                &format!("# T\n\n{}\n", line),
            );
            let summary = loader.load_summary(&path).unwrap();
            assert!(
                summary.description.ends_with("form"),
                "marker not recognized: {:?} -> {:?}",
                line,
                summary.description
            );
        }
    }

    #[test]
    fn test_description_falls_back_to_frontmatter_then_empty() {
        let dir = tempdir().unwrap();
        let with_fm = write_doc(
            dir.path(),
            "a/fm.md",
            "---\ndescription: From frontmatter\n---\n# T\n",
        );
        let bare = write_doc(dir.path(), "a/none.md", "# T\n");

        let loader = DocumentLoader::new(dir.path());
        assert_eq!(
            loader.load_summary(&with_fm).unwrap().description,
            "From frontmatter"
        );
        assert_eq!(loader.load_summary(&bare).unwrap().description, "");
    }

    #[test]
    fn test_difficulty_from_frontmatter() {
        let dir = tempdir().unwrap();
        let path = write_doc(
            dir.path(),
            "a/doc.md",
            "---\ndifficulty: advanced\n---\n# T\n",
        );

        let loader = DocumentLoader::new(dir.path());
        let summary = loader.load_summary(&path).unwrap();
        assert_eq!(summary.metadata.difficulty, Some(Difficulty::Advanced));
    }

    #[test]
    fn test_reading_time_is_positive() {
        let dir = tempdir().unwrap();
        let path = write_doc(dir.path(), "a/tiny.md", "# T\n");

        let loader = DocumentLoader::new(dir.path());
        assert!(loader.load_summary(&path).unwrap().metadata.reading_time >= 1);
    }

    #[test]
    fn test_load_full_unknown_slug_is_none() {
        let dir = tempdir().unwrap();
        let loader = DocumentLoader::new(dir.path());
        assert!(loader.load_full("missing/doc", &[]).unwrap().is_none());
        assert!(loader.load_full("../escape", &[]).unwrap().is_none());
        assert!(loader.load_full("", &[]).unwrap().is_none());
    }

    #[test]
    fn test_load_full_assigns_neighbors_from_index() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "a/first.md", "# First\n");
        write_doc(dir.path(), "a/second.md", "# Second\n");
        write_doc(dir.path(), "a/third.md", "# Third\n");

        let loader = DocumentLoader::new(dir.path());
        let index: Vec<_> = ["a/first.md", "a/second.md", "a/third.md"]
            .iter()
            .map(|rel| loader.load_summary(&dir.path().join(rel)).unwrap())
            .collect();

        let doc = loader.load_full("a/second", &index).unwrap().unwrap();
        assert_eq!(doc.prev.as_deref(), Some("a/first"));
        assert_eq!(doc.next.as_deref(), Some("a/third"));

        // Slug absent from the supplied index: neighbors stay unset
        write_doc(dir.path(), "b/orphan.md", "# Orphan\n");
        let orphan = loader.load_full("b/orphan", &index).unwrap().unwrap();
        assert_eq!(orphan.prev, None);
        assert_eq!(orphan.next, None);
    }

    #[test]
    fn test_load_full_round_trip_from_scan() {
        let dir = tempdir().unwrap();
        let path = write_doc(dir.path(), "net/http/caching.md", "# Caching\n");

        let loader = DocumentLoader::new(dir.path());
        let summary = loader.load_summary(&path).unwrap();
        let doc = loader.load_full(&summary.slug, &[]).unwrap().unwrap();
        assert_eq!(doc.slug, "net/http/caching");
        assert_eq!(doc.category, "net");
    }

    #[test]
    fn test_malformed_frontmatter_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write_doc(
            dir.path(),
            "a/broken.md",
            "---\ntitle: X\nbad: [unclosed\n---\n# T\n",
        );

        let loader = DocumentLoader::new(dir.path());
        assert!(loader.load_summary(&path).is_err());
        assert!(loader.load_full("a/broken", &[]).is_err());
    }

    #[test]
    fn test_unreadable_document_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/binary.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let loader = DocumentLoader::new(dir.path());
        assert!(loader.load_summary(&path).is_err());
    }
}
