//! Static snapshot served when the file-system-backed path fails.
//!
//! The snapshot is shaped exactly like the live data model, so callers
//! cannot tell the source apart from the return type. A baked copy ships
//! inside the binary; deployments can inject their own through
//! [`ContentIndex::new`](crate::index::ContentIndex::new).

use crate::models::{DocumentSummary, FullDocument, NavigationGroup};
use crate::search;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

const BAKED_SNAPSHOT: &str = include_str!("../assets/fallback.yml");

static BAKED: OnceLock<FallbackStore> = OnceLock::new();

/// Pre-baked content and navigation data
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FallbackStore {
    #[serde(default)]
    pub summaries: Vec<DocumentSummary>,

    #[serde(default)]
    pub documents: Vec<FullDocument>,

    #[serde(default)]
    pub navigation: Vec<NavigationGroup>,
}

impl FallbackStore {
    /// The snapshot bundled with the deployment.
    pub fn baked() -> Self {
        BAKED
            .get_or_init(|| match serde_yaml::from_str(BAKED_SNAPSHOT) {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!("Baked fallback snapshot failed to parse: {}", e);
                    FallbackStore::default()
                }
            })
            .clone()
    }

    /// An empty store, for deployments that prefer empty results over
    /// stale content when the primary path fails.
    pub fn empty() -> Self {
        FallbackStore::default()
    }

    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.summaries.clone()
    }

    pub fn by_category(&self, category: &str) -> Vec<DocumentSummary> {
        self.summaries
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }

    pub fn document(&self, slug: &str) -> Option<FullDocument> {
        self.documents.iter().find(|d| d.slug == slug).cloned()
    }

    pub fn related(&self, slug: &str) -> Vec<DocumentSummary> {
        let Some(doc) = self.documents.iter().find(|d| d.slug == slug) else {
            return Vec::new();
        };
        let related: HashSet<&str> = doc.related.iter().map(String::as_str).collect();
        self.summaries
            .iter()
            .filter(|s| related.contains(s.slug.as_str()))
            .cloned()
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<DocumentSummary> {
        search::search(self.summaries.clone(), query)
    }

    pub fn navigation(&self) -> Vec<NavigationGroup> {
        self.navigation.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baked_snapshot_parses() {
        let store = FallbackStore::baked();
        assert!(!store.summaries.is_empty());
        assert!(!store.documents.is_empty());
        assert!(!store.navigation.is_empty());
    }

    #[test]
    fn test_baked_snapshot_is_internally_consistent() {
        let store = FallbackStore::baked();

        for doc in &store.documents {
            assert!(
                store.summaries.iter().any(|s| s.slug == doc.slug),
                "snapshot document {} has no summary",
                doc.slug
            );
        }
        for summary in &store.summaries {
            assert!(summary.metadata.reading_time >= 1);
            assert_eq!(
                summary.category,
                crate::slug::category_from_slug(&summary.slug)
            );
        }
    }

    #[test]
    fn test_lookups_mirror_index_operations() {
        let store = FallbackStore::baked();

        let first = &store.summaries[0];
        assert!(store.document(&first.slug).is_some());
        assert!(store.document("no/such-slug").is_none());
        assert_eq!(store.by_category(&first.category)[0].slug, first.slug);
        assert!(store.search("x").is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = FallbackStore::empty();
        assert!(store.summaries().is_empty());
        assert!(store.navigation().is_empty());
        assert!(store.document("anything").is_none());
    }
}
