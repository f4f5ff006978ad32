//! Curated site navigation: loading and corpus cross-checking.
//!
//! The navigation tree is authored separately from the scanned corpus,
//! so the two can silently diverge. `validate_navigation` surfaces the
//! mismatches as diagnostics instead of leaving them to become runtime
//! 404s.

use crate::models::{Diagnostic, DiagnosticSeverity, DocumentSummary, NavItem, NavigationGroup};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Failed to read navigation file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse navigation YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load the curated navigation tree from a YAML file.
pub fn load_navigation(path: &Path) -> Result<Vec<NavigationGroup>, NavigationError> {
    let contents = std::fs::read_to_string(path)?;
    let groups: Vec<NavigationGroup> = serde_yaml::from_str(&contents)?;
    Ok(groups)
}

/// Cross-check the curated tree against the live corpus.
///
/// Emits a warning for every navigation slug (children included) that no
/// scanned document answers to, and for every scanned category that no
/// navigation group covers. External items are skipped.
pub fn validate_navigation(
    groups: &[NavigationGroup],
    summaries: &[DocumentSummary],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let live_slugs: HashSet<&str> = summaries.iter().map(|s| s.slug.as_str()).collect();
    for group in groups {
        for item in &group.items {
            check_item(item, &group.category, &live_slugs, &mut diagnostics);
        }
    }

    let covered: HashSet<&str> = groups.iter().map(|g| g.category_slug.as_str()).collect();
    let mut seen = HashSet::new();
    for summary in summaries {
        if !seen.insert(summary.category.as_str()) {
            continue;
        }
        if !covered.contains(summary.category.as_str()) {
            diagnostics.push(Diagnostic {
                code: "nav.uncovered-category".into(),
                message: format!(
                    "Category '{}' has scanned documents but no navigation group",
                    summary.category
                ),
                severity: DiagnosticSeverity::Warning,
                slug: Some(summary.slug.clone()),
            });
        }
    }

    diagnostics
}

fn check_item(
    item: &NavItem,
    category: &str,
    live_slugs: &HashSet<&str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !item.is_external && !live_slugs.contains(item.slug.as_str()) {
        diagnostics.push(Diagnostic {
            code: "nav.missing-document".into(),
            message: format!(
                "Navigation entry '{}' in group '{}' points at a slug with no document",
                item.title, category
            ),
            severity: DiagnosticSeverity::Warning,
            slug: Some(item.slug.clone()),
        });
    }

    for child in &item.children {
        check_item(child, category, live_slugs, diagnostics);
    }
}
