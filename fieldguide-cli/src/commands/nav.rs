//! Print the curated navigation tree.

use super::open_index;
use anyhow::Result;
use fieldguide_core::NavItem;
use std::path::Path;

pub fn show_navigation(config_path: &Path, json: bool) -> Result<()> {
    let index = open_index(config_path)?;
    let groups = index.navigation();

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in &groups {
        println!("{} ({})", group.category, group.category_slug);
        if let Some(description) = &group.description {
            println!("  {}", description);
        }
        for item in &group.items {
            print_item(item, 1);
        }
    }

    Ok(())
}

fn print_item(item: &NavItem, depth: usize) {
    let marker = if item.is_external { " ->" } else { "" };
    println!("{}- {} ({}){}", "  ".repeat(depth), item.title, item.slug, marker);
    for child in &item.children {
        print_item(child, depth + 1);
    }
}
