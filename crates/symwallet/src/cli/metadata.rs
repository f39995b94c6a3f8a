//! Metadata commands.

use clap::{Args, Subcommand};

use symwallet_core::account::Address;
use symwallet_core::metadata::MetadataType;

/// Metadata commands.
#[derive(Debug, Args)]
pub struct MetadataCommand {
    #[command(subcommand)]
    pub action: MetadataAction,
}

#[derive(Debug, Subcommand)]
pub enum MetadataAction {
    /// Print the cached list, then the fresh list from the node.
    List {
        /// Target account address (plain or hyphenated).
        #[arg(long)]
        address: Address,
        /// Metadata type: account, mosaic or namespace.
        #[arg(long = "type", default_value = "account")]
        metadata_type: MetadataType,
        /// Network generation hash; fetched from the node when omitted.
        #[arg(long)]
        generation_hash: Option<String>,
    },
    /// Build an unsigned metadata transaction and print its details.
    Transaction {
        /// Account that signs the transaction.
        #[arg(long)]
        source: Address,
        /// Account the metadata is attached to.
        #[arg(long)]
        target: Address,
        /// Metadata type: account, mosaic or namespace.
        #[arg(long = "type", default_value = "account")]
        metadata_type: MetadataType,
        /// Mosaic or namespace id in hex; required unless the type is account.
        #[arg(long)]
        target_id: Option<String>,
        /// Metadata key.
        #[arg(long)]
        key: String,
        /// Metadata value.
        #[arg(long)]
        value: String,
        /// Maximum fee in absolute units.
        #[arg(long, default_value = "0")]
        max_fee: u64,
        /// Hours until the transaction expires.
        #[arg(long, default_value = "2")]
        deadline_hours: i64,
    },
}
