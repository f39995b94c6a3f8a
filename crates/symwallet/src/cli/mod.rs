//! CLI command definitions.

pub mod cache;
pub mod metadata;
pub mod validate;

use clap::{Parser, Subcommand, ValueEnum};

/// Symwallet - cached metadata and form validation for Symbol accounts
#[derive(Debug, Parser)]
#[command(name = "symwallet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// REST node base URL.
    #[arg(long, env = "NODE_URL", default_value = "http://localhost:3000")]
    pub node_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Metadata attached to an account.
    Metadata(metadata::MetadataCommand),
    /// Check a value against validation rules.
    Validate(validate::ValidateCommand),
    /// Local cache maintenance.
    Cache(cache::CacheCommand),
}
