//! Typed entity lists on top of a byte-level [`Cache`].

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{deserialize_entities, entity_key, serialize_entities, Cache, EntityCacheStore, Result};

/// Stores one ordered entity list per partition key in a logical table.
///
/// Each list is written as a single JSON blob, so a `set` is one backend
/// write and readers see either the old or the new list.
pub struct EntityCache<C, E> {
    cache: Arc<C>,
    table: &'static str,
    ttl: Option<Duration>,
    _entity: PhantomData<fn() -> E>,
}

impl<C, E> EntityCache<C, E>
where
    C: Cache,
{
    /// Creates a new entity cache over `cache` for the given table.
    ///
    /// # Arguments
    ///
    /// * `cache` - The byte-level backend
    /// * `table` - Logical table name, one per entity kind
    /// * `ttl` - Optional time-to-live; `None` keeps lists until replaced
    pub fn new(cache: Arc<C>, table: &'static str, ttl: Option<Duration>) -> Self {
        Self {
            cache,
            table,
            ttl,
            _entity: PhantomData,
        }
    }

    /// Returns the logical table name.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Removes the cached list for `partition_key`.
    pub async fn invalidate(&self, partition_key: &str) -> Result<()> {
        self.cache.delete(&entity_key(self.table, partition_key)).await
    }
}

impl<C, E> Clone for EntityCache<C, E> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            table: self.table,
            ttl: self.ttl,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<C, E> EntityCacheStore<E> for EntityCache<C, E>
where
    C: Cache + 'static,
    E: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn get(&self, partition_key: &str) -> Result<Option<Vec<E>>> {
        let key = entity_key(self.table, partition_key);
        match self.cache.get(&key).await? {
            Some(bytes) => Ok(Some(deserialize_entities(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, partition_key: &str, entities: &[E]) -> Result<()> {
        let key = entity_key(self.table, partition_key);
        let bytes = serialize_entities(entities)?;
        self.cache.set(&key, &bytes, self.ttl).await
    }
}
