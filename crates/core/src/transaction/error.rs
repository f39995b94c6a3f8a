use thiserror::Error;

use crate::metadata::MetadataError;

/// Errors that can occur when building a transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Metadata value too long ({actual} bytes, max {max})")]
    ValueTooLong { max: usize, actual: usize },
    #[error("Metadata key cannot be empty")]
    EmptyKey,
    #[error("Deadline must be a positive number of hours within the supported range")]
    InvalidDeadline,
    #[error("Invalid target: {0}")]
    InvalidTarget(#[from] MetadataError),
    #[error("Target address is on {actual:?}, transaction is for {expected:?}")]
    NetworkMismatch {
        expected: crate::account::NetworkType,
        actual: crate::account::NetworkType,
    },
}
