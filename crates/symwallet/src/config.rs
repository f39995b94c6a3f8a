use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST node (default: "http://localhost:3000")
    pub node_url: String,
    /// Cache TTL in seconds; 0 keeps entries until replaced (default: 0)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "symwallet.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    pub sqlite_path: String,
    /// Records requested per remote page (default: 100)
    pub page_size: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NODE_URL` - REST node base URL (default: "http://localhost:3000")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds, 0 for none (default: 0)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "symwallet.db")
    /// - `PAGE_SIZE` - Records per remote page (default: 100)
    pub fn from_env() -> Self {
        Self {
            node_url: env::var("NODE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "symwallet.db".to_string()),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(symwallet_core::repository::DEFAULT_PAGE_SIZE),
        }
    }

    /// Get cache TTL as a Duration, `None` when entries never expire.
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_seconds > 0).then(|| Duration::from_secs(self.cache_ttl_seconds))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
