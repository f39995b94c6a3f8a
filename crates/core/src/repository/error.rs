use thiserror::Error;

/// Errors returned by a remote repository query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteQueryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Query aborted: {0}")]
    Aborted(String),
}

/// Result type for remote repository operations.
pub type Result<T> = std::result::Result<T, RemoteQueryError>;
