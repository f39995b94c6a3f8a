use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::MetadataError;
use super::types::{format_id, MetadataType};

/// Parses a 64-bit id written as up to 16 hex digits.
fn parse_hex_id(kind: &'static str, raw: &str) -> Result<u64, MetadataError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > 16 {
        return Err(MetadataError::InvalidTargetId {
            kind,
            value: raw.to_string(),
        });
    }
    u64::from_str_radix(trimmed, 16).map_err(|_| MetadataError::InvalidTargetId {
        kind,
        value: raw.to_string(),
    })
}

/// Identifier of a mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MosaicId(pub u64);

impl MosaicId {
    /// Parses a hex mosaic id such as `3A8416DB2D53B6C8`.
    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        parse_hex_id("mosaic", raw).map(Self)
    }
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_id(self.0))
    }
}

/// Identifier of a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceId(pub u64);

impl NamespaceId {
    /// Parses a hex namespace id such as `85BBEA6CC462B244`.
    pub fn parse(raw: &str) -> Result<Self, MetadataError> {
        parse_hex_id("namespace", raw).map(Self)
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_id(self.0))
    }
}

/// The entity a metadata entry is attached to.
///
/// Each variant maps to exactly one transaction kind, so adding a target
/// forces every `match` over it to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataTarget {
    Account,
    Mosaic(MosaicId),
    Namespace(NamespaceId),
}

impl MetadataTarget {
    /// Builds a target from a metadata type and the raw target id.
    ///
    /// The id is ignored for account metadata and required otherwise.
    pub fn from_parts(
        metadata_type: MetadataType,
        target_id: Option<&str>,
    ) -> Result<Self, MetadataError> {
        match metadata_type {
            MetadataType::Account => Ok(MetadataTarget::Account),
            MetadataType::Mosaic => {
                let raw = target_id.ok_or(MetadataError::MissingTargetId("Mosaic"))?;
                MosaicId::parse(raw).map(MetadataTarget::Mosaic)
            }
            MetadataType::Namespace => {
                let raw = target_id.ok_or(MetadataError::MissingTargetId("Namespace"))?;
                NamespaceId::parse(raw).map(MetadataTarget::Namespace)
            }
        }
    }

    /// Returns the metadata type of this target.
    pub fn metadata_type(&self) -> MetadataType {
        match self {
            MetadataTarget::Account => MetadataType::Account,
            MetadataTarget::Mosaic(_) => MetadataType::Mosaic,
            MetadataTarget::Namespace(_) => MetadataType::Namespace,
        }
    }

    /// Returns the raw target id, if any.
    pub fn target_id(&self) -> Option<u64> {
        match self {
            MetadataTarget::Account => None,
            MetadataTarget::Mosaic(id) => Some(id.0),
            MetadataTarget::Namespace(id) => Some(id.0),
        }
    }
}
