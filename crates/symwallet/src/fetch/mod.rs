//! Cached-first entity streams.
//!
//! [`ReadThrough`] pairs an [`EntityCacheStore`](symwallet_core::cache::EntityCacheStore)
//! with a remote query and yields the cached list (if any) followed by the
//! fresh one.

mod error;
mod read_through;

pub use error::FetchError;
pub use read_through::{EntityStream, ReadThrough};
