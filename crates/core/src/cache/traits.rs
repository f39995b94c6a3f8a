use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for byte-level cache backends.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    ///
    /// The previous value under `key` is replaced in a single step; readers
    /// never observe a partially written value.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Typed store mapping a partition key to an ordered list of entities.
#[async_trait]
pub trait EntityCacheStore<E>: Send + Sync {
    /// Returns the cached list for `partition_key`, or `None` if it was never
    /// populated.
    async fn get(&self, partition_key: &str) -> Result<Option<Vec<E>>>;

    /// Replaces the cached list for `partition_key` wholesale.
    async fn set(&self, partition_key: &str, entities: &[E]) -> Result<()>;
}
