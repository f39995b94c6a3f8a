//! symwallet - read-through metadata cache and validation rules for Symbol
//! wallets.

pub mod cache;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod output;
pub mod services;

pub use config::Config;
pub use fetch::{EntityStream, FetchError, ReadThrough};
pub use services::MetadataService;
