mod entity;
mod error;
mod keys;
mod serialization;
mod traits;

pub use entity::EntityCache;
pub use error::{CacheError, Result};
pub use keys::{entity_key, metadata_partition, METADATA_TABLE};
pub use serialization::{deserialize_entities, serialize_entities, SerializationError};
pub use traits::{Cache, EntityCacheStore};
