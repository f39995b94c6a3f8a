mod error;
mod format;
mod metadata;

pub use error::TransactionError;
pub use format::{relative_amount, TransactionDetails, TransactionHeader};
pub use metadata::{
    Deadline, MetadataTransaction, MetadataTransactionKind, MetadataTransactionParams,
    MAX_METADATA_VALUE_SIZE,
};
