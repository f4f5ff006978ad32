//! Substring search over document summaries.

use crate::models::DocumentSummary;

/// Queries shorter than this return no results rather than scanning
pub const MIN_QUERY_LEN: usize = 2;

/// Filter summaries by case-insensitive substring match on title or
/// description, preserving the input (corpus) order. The minimal form
/// computes no relevance score.
pub fn search(summaries: Vec<DocumentSummary>, query: &str) -> Vec<DocumentSummary> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    summaries
        .into_iter()
        .filter(|summary| matches(summary, &needle))
        .collect()
}

fn matches(summary: &DocumentSummary, needle: &str) -> bool {
    summary.title.to_lowercase().contains(needle)
        || summary.description.to_lowercase().contains(needle)
}
