//! List documents related to a slug.

use super::open_index;
use anyhow::Result;
use std::path::Path;

pub fn show_related(config_path: &Path, slug: &str, json: bool) -> Result<()> {
    let index = open_index(config_path)?;
    let related = index.get_related(slug);

    if json {
        println!("{}", serde_json::to_string_pretty(&related)?);
        return Ok(());
    }

    if related.is_empty() {
        println!("No related documents for '{}'", slug);
        return Ok(());
    }

    for summary in &related {
        println!("{}  {}", summary.slug, summary.title);
    }

    Ok(())
}
