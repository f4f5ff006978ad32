//! The content index: the per-request materialization of the corpus.
//!
//! Every operation independently re-scans the content root (the corpus
//! is small, see the design ledger) and falls back to the injected
//! snapshot on failure. Failures never escape this layer; the worst
//! user-visible outcome is static content instead of live content.

use crate::config::Config;
use crate::fallback::FallbackStore;
use crate::loader::{DocumentLoader, LoadError};
use crate::models::{Diagnostic, DocumentSummary, FullDocument, NavigationGroup};
use crate::navigation::{load_navigation, validate_navigation};
use crate::scanner::{scan, ScanError};
use crate::search;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

/// File-system-backed content index with snapshot fallback
pub struct ContentIndex {
    loader: DocumentLoader,
    fallback: FallbackStore,
    navigation_file: Option<PathBuf>,
}

impl ContentIndex {
    /// Build an index over `content_root`, answering from `fallback`
    /// whenever the primary path fails. Both are injected so tests and
    /// deployments can substitute either.
    pub fn new(content_root: impl Into<PathBuf>, fallback: FallbackStore) -> Self {
        Self {
            loader: DocumentLoader::new(content_root),
            fallback,
            navigation_file: None,
        }
    }

    /// Convenience constructor wiring paths from a loaded config and the
    /// baked snapshot.
    pub fn from_config(config: &Config) -> Self {
        let mut index = Self::new(config.content_dir(), FallbackStore::baked());
        index.navigation_file = config.navigation_file();
        index
    }

    /// Serve navigation from a curated YAML file instead of the snapshot
    pub fn with_navigation_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.navigation_file = Some(path.into());
        self
    }

    /// All document summaries in scan order.
    pub fn list_all(&self) -> Vec<DocumentSummary> {
        match self.scan_summaries() {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::error!("list_all failed, serving fallback snapshot: {}", e);
                self.fallback.summaries()
            }
        }
    }

    /// Summaries whose category exactly matches, in scan order.
    pub fn list_by_category(&self, category: &str) -> Vec<DocumentSummary> {
        match self.scan_summaries() {
            Ok(summaries) => summaries
                .into_iter()
                .filter(|s| s.category == category)
                .collect(),
            Err(e) => {
                tracing::error!(
                    "list_by_category({}) failed, serving fallback snapshot: {}",
                    category,
                    e
                );
                self.fallback.by_category(category)
            }
        }
    }

    /// The full document for a slug, with prev/next assigned from the
    /// current corpus ordering. `None` means the slug has no document —
    /// a valid outcome, not a failure.
    pub fn get_by_slug(&self, slug: &str) -> Option<FullDocument> {
        match self.try_get_by_slug(slug) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!(
                    "get_by_slug({}) failed, serving fallback snapshot: {}",
                    slug,
                    e
                );
                self.fallback.document(slug)
            }
        }
    }

    /// Summaries for the slugs curated in the document's `related` list,
    /// in corpus order rather than curation order.
    pub fn get_related(&self, slug: &str) -> Vec<DocumentSummary> {
        match self.try_get_related(slug) {
            Ok(related) => related,
            Err(e) => {
                tracing::error!(
                    "get_related({}) failed, serving fallback snapshot: {}",
                    slug,
                    e
                );
                self.fallback.related(slug)
            }
        }
    }

    /// Substring search over titles and descriptions. Queries shorter
    /// than two characters return nothing without touching the corpus.
    pub fn search(&self, query: &str) -> Vec<DocumentSummary> {
        if query.chars().count() < search::MIN_QUERY_LEN {
            return Vec::new();
        }

        match self.scan_summaries() {
            Ok(summaries) => search::search(summaries, query),
            Err(e) => {
                tracing::error!("search({:?}) failed, serving fallback snapshot: {}", query, e);
                self.fallback.search(query)
            }
        }
    }

    /// The curated navigation tree. Independent of the scanned corpus;
    /// the snapshot answers when no file is configured or loading fails.
    pub fn navigation(&self) -> Vec<NavigationGroup> {
        let Some(path) = &self.navigation_file else {
            return self.fallback.navigation();
        };

        match load_navigation(path) {
            Ok(groups) => groups,
            Err(e) => {
                tracing::error!(
                    "navigation load from {:?} failed, serving fallback snapshot: {}",
                    path,
                    e
                );
                self.fallback.navigation()
            }
        }
    }

    /// Cross-check the curated navigation against the live corpus.
    pub fn verify(&self) -> Vec<Diagnostic> {
        validate_navigation(&self.navigation(), &self.list_all())
    }

    fn try_get_by_slug(&self, slug: &str) -> Result<Option<FullDocument>, IndexError> {
        let index_order = self.scan_summaries()?;
        Ok(self.loader.load_full(slug, &index_order)?)
    }

    fn try_get_related(&self, slug: &str) -> Result<Vec<DocumentSummary>, IndexError> {
        let index_order = self.scan_summaries()?;
        let Some(doc) = self.loader.load_full(slug, &index_order)? else {
            return Ok(Vec::new());
        };

        let related: HashSet<&str> = doc.related.iter().map(String::as_str).collect();
        Ok(index_order
            .into_iter()
            .filter(|s| related.contains(s.slug.as_str()))
            .collect())
    }

    /// Scan and load every eligible document. Any I/O or parse failure
    /// aborts the whole pass; the caller converts that into a fallback
    /// response. Duplicate slugs are logged and kept (the later entry
    /// wins in any map keyed by slug).
    fn scan_summaries(&self) -> Result<Vec<DocumentSummary>, IndexError> {
        let files = scan(self.loader.root())?;

        let mut summaries = Vec::with_capacity(files.len());
        let mut seen: HashSet<String> = HashSet::new();
        for path in &files {
            let summary = self.loader.load_summary(path)?;
            if !seen.insert(summary.slug.clone()) {
                tracing::warn!("Duplicate slug: {}", summary.slug);
            }
            summaries.push(summary);
        }

        tracing::debug!("Scanned {} documents", summaries.len());
        Ok(summaries)
    }
}
