//! symwallet_client - HTTP client for Symbol REST nodes.

pub mod client;
pub mod dto;
pub mod error;

pub use client::NodeClient;
pub use error::{ClientError, Result};
