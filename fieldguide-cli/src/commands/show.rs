//! Fetch a single document in structured form.

use super::open_index;
use crate::ShowFormat;
use anyhow::{Context, Result};
use std::path::Path;

pub fn show_document(config_path: &Path, slug: &str, format: ShowFormat) -> Result<()> {
    let index = open_index(config_path)?;

    let doc = index
        .get_by_slug(slug)
        .with_context(|| format!("Document '{}' not found", slug))?;

    match format {
        ShowFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        ShowFormat::Html => {
            println!("{}", doc.content);
        }
        ShowFormat::Text => {
            println!("{}", doc.title);
            if !doc.description.is_empty() {
                println!("{}", doc.description);
            }
            println!(
                "category: {}  reading time: {} min  updated: {}",
                doc.category, doc.metadata.reading_time, doc.metadata.last_updated
            );
            if !doc.tags.is_empty() {
                println!("tags: {}", doc.tags.join(", "));
            }
            if let Some(prev) = &doc.prev {
                println!("prev: {}", prev);
            }
            if let Some(next) = &doc.next {
                println!("next: {}", next);
            }
        }
    }

    Ok(())
}
