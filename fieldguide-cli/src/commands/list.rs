//! List document summaries, optionally filtered by category.

use super::open_index;
use anyhow::Result;
use std::path::Path;

pub fn list_documents(config_path: &Path, category: Option<&str>, json: bool) -> Result<()> {
    let index = open_index(config_path)?;

    let summaries = match category {
        Some(category) => index.list_by_category(category),
        None => index.list_all(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        let difficulty = summary
            .metadata
            .difficulty
            .map(|d| format!(" [{}]", d.as_str()))
            .unwrap_or_default();
        println!(
            "{}  {} ({} min){}",
            summary.slug, summary.title, summary.metadata.reading_time, difficulty
        );
    }
    println!("{} documents", summaries.len());

    Ok(())
}
