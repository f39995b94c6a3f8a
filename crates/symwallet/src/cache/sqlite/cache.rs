//! SQLite cache implementation.
//!
//! Implements the `Cache` trait from `symwallet_core::cache` on a single
//! `cache_entries` table.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use symwallet_core::cache::{Cache, CacheError, Result};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Milliseconds since the Unix epoch.
fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Expiry instant for an entry written now, saturating at `i64::MAX`.
fn expires_at_millis(ttl: Duration) -> i64 {
    let ttl = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    now_millis().saturating_add(ttl)
}

/// SQLite-backed cache.
///
/// Each `set` is a single upsert statement, so a key is replaced atomically.
/// Expired rows are dropped lazily on read and by [`SqliteCache::purge_expired`].
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens (or creates) a file-based cache database.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::debug!(path, "Opened SQLite cache");

        Ok(Self { conn })
    }

    /// Creates a cache backed by an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }

    /// Deletes every expired row and returns how many were removed.
    pub async fn purge_expired(&self) -> Result<usize> {
        let now = now_millis();
        let removed = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_EXPIRED, [now])
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::debug!(removed, "Purged expired cache entries");
        Ok(removed)
    }
}

#[async_trait]
impl Cache for SqliteCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let key = key.to_string();
        let now = now_millis();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ENTRY).map_err(wrap_err)?;
                let row = stmt.query_row([&key], |row| {
                    Ok((row.get::<_, Vec<u8>>(0)?, row.get::<_, Option<i64>>(1)?))
                });

                match row {
                    Ok((_, Some(expires_at))) if expires_at <= now => {
                        conn.execute(schema::DELETE_ENTRY, [&key])
                            .map_err(wrap_err)?;
                        Ok(None)
                    }
                    Ok((value, _)) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let key = key.to_string();
        let value = value.to_vec();
        let expires_at = ttl.map(expires_at_millis);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_ENTRY,
                    rusqlite::params![key, value, expires_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let key = key.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_ENTRY, [&key])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
