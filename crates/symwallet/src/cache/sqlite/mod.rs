//! SQLite cache backend implementation.
//!
//! Stores every cache key in one table using `rusqlite` for synchronous
//! operations and `tokio-rusqlite` for async wrapping. Entries survive
//! process restarts.

mod cache;
mod error;
mod schema;

pub use cache::SqliteCache;
