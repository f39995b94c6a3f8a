//! Wire types returned by Symbol REST nodes and their conversions.

use serde::Deserialize;

use symwallet_core::account::Address;
use symwallet_core::metadata::{Metadata, MetadataType};
use symwallet_core::repository::{MetadataSearchCriteria, Page};

use crate::error::{ClientError, Result};

/// Body of `GET /metadata`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPageDto {
    pub data: Vec<MetadataInfoDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataInfoDto {
    pub id: String,
    pub metadata_entry: MetadataEntryDto,
}

/// Metadata entry with addresses, keys and value hex encoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntryDto {
    pub composite_hash: String,
    pub source_address: String,
    pub target_address: String,
    pub scoped_metadata_key: String,
    pub target_id: String,
    pub metadata_type: u8,
    pub value: String,
}

/// Body of `GET /node/info`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfoDto {
    pub network_generation_hash_seed: String,
    pub network_identifier: u8,
    #[serde(default)]
    pub friendly_name: String,
}

fn invalid(field: &str, err: impl std::fmt::Display) -> ClientError {
    ClientError::InvalidResponse(format!("{field}: {err}"))
}

fn parse_hex_u64(field: &str, raw: &str) -> Result<u64> {
    u64::from_str_radix(raw, 16).map_err(|e| invalid(field, e))
}

impl TryFrom<MetadataInfoDto> for Metadata {
    type Error = ClientError;

    fn try_from(dto: MetadataInfoDto) -> Result<Self> {
        let entry = dto.metadata_entry;
        let metadata_type =
            MetadataType::try_from(entry.metadata_type).map_err(|e| invalid("metadataType", e))?;
        let target_id = match metadata_type {
            MetadataType::Account => None,
            MetadataType::Mosaic | MetadataType::Namespace => {
                Some(parse_hex_u64("targetId", &entry.target_id)?)
            }
        };
        let value = hex::decode(&entry.value).map_err(|e| invalid("value", e))?;
        let value = String::from_utf8(value).map_err(|e| invalid("value", e))?;

        Ok(Metadata {
            id: dto.id,
            composite_hash: entry.composite_hash,
            source_address: Address::from_encoded(&entry.source_address)
                .map_err(|e| invalid("sourceAddress", e))?,
            target_address: Address::from_encoded(&entry.target_address)
                .map_err(|e| invalid("targetAddress", e))?,
            scoped_metadata_key: parse_hex_u64("scopedMetadataKey", &entry.scoped_metadata_key)?,
            target_id,
            metadata_type,
            value,
        })
    }
}

impl TryFrom<MetadataPageDto> for Page<Metadata> {
    type Error = ClientError;

    fn try_from(dto: MetadataPageDto) -> Result<Self> {
        let data = dto
            .data
            .into_iter()
            .map(Metadata::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            data,
            page_number: dto.pagination.page_number,
            page_size: dto.pagination.page_size,
        })
    }
}

/// Query string parameters for a metadata search.
pub fn search_query(criteria: &MetadataSearchCriteria) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(address) = &criteria.target_address {
        query.push(("targetAddress", address.plain().to_string()));
    }
    if let Some(address) = &criteria.source_address {
        query.push(("sourceAddress", address.plain().to_string()));
    }
    if let Some(metadata_type) = criteria.metadata_type {
        query.push(("metadataType", u8::from(metadata_type).to_string()));
    }
    if let Some(key) = criteria.scoped_metadata_key {
        query.push(("scopedMetadataKey", format!("{key:016X}")));
    }
    if let Some(target_id) = criteria.target_id {
        query.push(("targetId", format!("{target_id:016X}")));
    }
    if let Some(page_size) = criteria.page_size {
        query.push(("pageSize", page_size.to_string()));
    }
    if let Some(page_number) = criteria.page_number {
        query.push(("pageNumber", page_number.to_string()));
    }
    query
}
