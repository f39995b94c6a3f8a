//! Client error types.

use thiserror::Error;

use symwallet_core::repository::RemoteQueryError;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for RemoteQueryError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) if e.is_decode() => {
                RemoteQueryError::InvalidResponse(e.to_string())
            }
            ClientError::Request(e) => RemoteQueryError::ConnectionFailed(e.to_string()),
            ClientError::ServerError { status, message } => {
                RemoteQueryError::ServerError { status, message }
            }
            ClientError::NotFound { resource } => RemoteQueryError::ServerError {
                status: 404,
                message: format!("{resource} not found"),
            },
            ClientError::InvalidResponse(message) => RemoteQueryError::InvalidResponse(message),
            ClientError::Json(e) => RemoteQueryError::InvalidResponse(e.to_string()),
        }
    }
}
