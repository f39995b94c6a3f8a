use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::account::Address;

use super::error::MetadataError;

/// The kind of entity a metadata entry is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MetadataType {
    Account,
    Mosaic,
    Namespace,
}

impl MetadataType {
    /// Returns the lowercase name used in CLI arguments and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataType::Account => "account",
            MetadataType::Mosaic => "mosaic",
            MetadataType::Namespace => "namespace",
        }
    }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for MetadataType {
    type Error = MetadataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MetadataType::Account),
            1 => Ok(MetadataType::Mosaic),
            2 => Ok(MetadataType::Namespace),
            other => Err(MetadataError::UnknownType(other.to_string())),
        }
    }
}

impl From<MetadataType> for u8 {
    fn from(value: MetadataType) -> Self {
        match value {
            MetadataType::Account => 0,
            MetadataType::Mosaic => 1,
            MetadataType::Namespace => 2,
        }
    }
}

impl FromStr for MetadataType {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "account" | "0" => Ok(MetadataType::Account),
            "mosaic" | "1" => Ok(MetadataType::Mosaic),
            "namespace" | "2" => Ok(MetadataType::Namespace),
            other => Err(MetadataError::UnknownType(other.to_string())),
        }
    }
}

/// A metadata record as returned by the remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub id: String,
    pub composite_hash: String,
    pub source_address: Address,
    pub target_address: Address,
    pub scoped_metadata_key: u64,
    /// Mosaic or namespace id; `None` for account metadata.
    pub target_id: Option<u64>,
    pub metadata_type: MetadataType,
    pub value: String,
}

/// Cached, display-ready view of a metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataModel {
    pub metadata_id: String,
    pub composite_hash: String,
    pub source_address: String,
    pub target_address: String,
    /// Scoped key as 16 uppercase hex digits.
    pub scoped_metadata_key: String,
    pub target_id: Option<String>,
    pub metadata_type: MetadataType,
    pub value: String,
}

impl From<Metadata> for MetadataModel {
    fn from(metadata: Metadata) -> Self {
        Self {
            metadata_id: metadata.id,
            composite_hash: metadata.composite_hash,
            source_address: metadata.source_address.plain().to_string(),
            target_address: metadata.target_address.plain().to_string(),
            scoped_metadata_key: format_id(metadata.scoped_metadata_key),
            target_id: metadata.target_id.map(format_id),
            metadata_type: metadata.metadata_type,
            value: metadata.value,
        }
    }
}

/// Formats a 64-bit id or key as 16 uppercase hex digits.
pub fn format_id(id: u64) -> String {
    format!("{id:016X}")
}
