use thiserror::Error;

/// Errors that can occur when interpreting metadata fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Unknown metadata type: {0}")]
    UnknownType(String),
    #[error("Invalid {kind} id: {value}")]
    InvalidTargetId { kind: &'static str, value: String },
    #[error("{0} metadata requires a target id")]
    MissingTargetId(&'static str),
}
