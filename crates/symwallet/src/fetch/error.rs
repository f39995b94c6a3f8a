use thiserror::Error;

use symwallet_core::cache::CacheError;
use symwallet_core::repository::RemoteQueryError;

/// Errors delivered on an entity stream.
///
/// Either variant ends the stream; values already delivered stay valid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Remote query failed: {0}")]
    Remote(#[from] RemoteQueryError),
    #[error("Cache storage failed: {0}")]
    Storage(#[from] CacheError),
}
