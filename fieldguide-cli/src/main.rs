//! # fieldguide CLI
//!
//! Command-line interface over the fieldguide content resolution
//! pipeline: listing, fetching, searching, navigation, and corpus
//! verification.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use fieldguide_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldguide")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List document summaries
    List {
        /// Only documents in this category
        #[arg(long)]
        category: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch a single document by slug
    Show {
        /// Document slug, e.g. "design-principle/solid"
        slug: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Text)]
        format: ShowFormat,
    },

    /// Search titles and descriptions
    Search {
        /// Search query (shorter than 2 characters returns nothing)
        query: String,

        /// Maximum results to return
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the curated navigation tree
    Nav {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List documents related to a slug
    Related {
        /// Document slug
        slug: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Cross-check navigation against the corpus and emit diagnostics
    Verify {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, ValueEnum)]
pub enum ShowFormat {
    Text,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::List { category, json } => {
            commands::list_documents(&cli.config, category.as_deref(), json)
        }
        Commands::Show { slug, format } => commands::show_document(&cli.config, &slug, format),
        Commands::Search { query, limit, json } => {
            commands::search_corpus(&cli.config, &query, limit, json)
        }
        Commands::Nav { json } => commands::show_navigation(&cli.config, json),
        Commands::Related { slug, json } => commands::show_related(&cli.config, &slug, json),
        Commands::Verify { json } => commands::verify_corpus(&cli.config, json),
    }
}
