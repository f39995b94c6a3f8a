//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the cache table.
pub const CREATE_TABLES: &str = r#"
-- One row per cache key; value is an opaque blob
CREATE TABLE IF NOT EXISTS cache_entries (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL,
    expires_at INTEGER
);

CREATE INDEX IF NOT EXISTS idx_cache_entries_expires_at ON cache_entries(expires_at);
"#;

pub const SELECT_ENTRY: &str = r#"
SELECT value, expires_at
FROM cache_entries
WHERE key = ?1
"#;

/// Replaces the whole row in one statement.
pub const UPSERT_ENTRY: &str = r#"
INSERT INTO cache_entries (key, value, expires_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET value = excluded.value, expires_at = excluded.expires_at
"#;

pub const DELETE_ENTRY: &str = r#"
DELETE FROM cache_entries
WHERE key = ?1
"#;

pub const DELETE_EXPIRED: &str = r#"
DELETE FROM cache_entries
WHERE expires_at IS NOT NULL AND expires_at <= ?1
"#;
