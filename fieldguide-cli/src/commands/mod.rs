//! CLI command implementations.

pub mod list;
pub mod nav;
pub mod related;
pub mod search;
pub mod show;
pub mod verify;

pub use list::list_documents;
pub use nav::show_navigation;
pub use related::show_related;
pub use search::search_corpus;
pub use show::show_document;
pub use verify::verify_corpus;

use anyhow::{Context, Result};
use fieldguide_core::{Config, ContentIndex};
use std::path::Path;

/// Load the config and build a content index from it.
pub(crate) fn open_index(config_path: &Path) -> Result<ContentIndex> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    Ok(ContentIndex::from_config(&config))
}
