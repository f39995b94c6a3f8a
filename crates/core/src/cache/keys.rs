use crate::account::Address;
use crate::metadata::MetadataType;

/// Logical table holding cached metadata lists.
pub const METADATA_TABLE: &str = "metadata";

/// Returns the cache key for an entity list within a logical table.
///
/// # Examples
///
/// ```
/// use symwallet_core::cache::entity_key;
///
/// assert_eq!(entity_key("metadata", "57F7DA20"), "metadata:57F7DA20");
/// ```
pub fn entity_key(table: &str, partition_key: &str) -> String {
    format!("{}:{}", table, partition_key)
}

/// Returns the partition key for the metadata of one type attached to
/// `address` on the network identified by `generation_hash`.
pub fn metadata_partition(
    generation_hash: &str,
    address: &Address,
    metadata_type: MetadataType,
) -> String {
    format!("{}:{}:{}", generation_hash, address.plain(), metadata_type)
}
