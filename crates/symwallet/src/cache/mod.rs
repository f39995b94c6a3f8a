//! Cache backend implementations.
//!
//! This module provides concrete implementations of the byte-level
//! [`Cache`](symwallet_core::cache::Cache) trait defined in
//! `symwallet_core::cache`. The implementation is selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): Persistent cache in a single SQLite table via tokio-rusqlite
//! - `memory`: In-memory LRU cache using tokio synchronization primitives; its
//!   contents live only as long as the process
//!
//! These features are mutually exclusive - only one cache backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "sqlite"))]
compile_error!(
    "Features 'memory' and 'sqlite' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'sqlite' feature. \
    Example: cargo build -p symwallet --no-default-features --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

// Re-export the active cache implementation
#[cfg(feature = "memory")]
pub use memory::MemoryCache;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCache;
