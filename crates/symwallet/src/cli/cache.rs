//! Cache commands.

use clap::{Args, Subcommand};

use symwallet_core::account::Address;
use symwallet_core::metadata::MetadataType;

/// Cache commands.
#[derive(Debug, Args)]
pub struct CacheCommand {
    #[command(subcommand)]
    pub action: CacheAction,
}

#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Remove the cached metadata list of an account.
    Clear {
        /// Account address.
        #[arg(long)]
        address: Address,
        /// Metadata type: account, mosaic or namespace.
        #[arg(long = "type", default_value = "account")]
        metadata_type: MetadataType,
        /// Network generation hash.
        #[arg(long)]
        generation_hash: String,
    },
    /// Remove every expired entry from the cache database.
    Purge,
}
