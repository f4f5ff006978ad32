//! Search titles and descriptions.

use super::open_index;
use anyhow::Result;
use std::path::Path;

pub fn search_corpus(config_path: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    let index = open_index(config_path)?;

    let mut results = index.search(query);
    results.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for '{}'", query);
        return Ok(());
    }

    for summary in &results {
        println!("{}  {}", summary.slug, summary.title);
        if !summary.description.is_empty() {
            println!("    {}", summary.description);
        }
    }

    Ok(())
}
