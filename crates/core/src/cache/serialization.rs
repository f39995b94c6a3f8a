//! Pure functions for serializing/deserializing entity lists to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::CacheError;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

impl From<SerializationError> for CacheError {
    fn from(err: SerializationError) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of entities to a JSON array.
///
/// # Arguments
/// * `entities` - The entities to serialize, in order
///
/// # Returns
/// JSON-encoded bytes representing the entities array
pub fn serialize_entities<E: Serialize>(entities: &[E]) -> Result<Vec<u8>> {
    serde_json::to_vec(entities).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a JSON array to a vector of entities.
///
/// # Arguments
/// * `bytes` - JSON-encoded bytes
///
/// # Returns
/// The deserialized entities, in stored order
pub fn deserialize_entities<E: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<E>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
    }

    fn item(id: &str) -> Item {
        Item { id: id.to_string() }
    }

    #[test]
    fn test_entities_keep_order() {
        let items = vec![item("m2"), item("m1"), item("m3")];
        let bytes = serialize_entities(&items).unwrap();
        let restored: Vec<Item> = deserialize_entities(&bytes).unwrap();
        assert_eq!(restored, items);
    }

    #[test]
    fn test_empty_list_is_a_json_array() {
        let bytes = serialize_entities::<Item>(&[]).unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_deserialize_invalid_bytes() {
        let result = deserialize_entities::<Item>(b"not json");
        assert!(matches!(result, Err(SerializationError::DeserializeFailed(_))));
    }

    #[test]
    fn test_serialization_error_converts_to_cache_error() {
        let err: CacheError = SerializationError::DeserializeFailed("eof".to_string()).into();
        assert_eq!(
            err,
            CacheError::Serialization("Failed to deserialize: eof".to_string())
        );
    }
}
