//! Command-line argument definition.

use clap::Parser;

/// charbrowse - browse the Rick and Morty character catalog from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "charbrowse")]
#[command(version)]
#[command(about = "Browse the Rick and Morty character catalog from the terminal", long_about = None)]
pub struct Args {
    /// GraphQL endpoint to query (overrides settings.toml)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// UI language on startup: en or de (overrides settings.toml)
    #[arg(long = "lang")]
    pub language: Option<String>,

    /// Initial sort order: name or origin (overrides settings.toml)
    #[arg(long)]
    pub sort: Option<String>,

    /// Number of pages kept in the response cache
    #[arg(long)]
    pub cache_capacity: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Go back to page 1 whenever a filter is edited
    #[arg(long)]
    pub reset_page_on_filter: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}
