use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::account::{Address, NetworkType};
use crate::metadata::{generate_scoped_key, MetadataTarget, MosaicId, NamespaceId};

use super::TransactionError;

/// Largest metadata value accepted by the network, in bytes.
pub const MAX_METADATA_VALUE_SIZE: usize = 1024;

/// Point in time after which a transaction is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Deadline(DateTime<Utc>);

impl Deadline {
    /// Deadline `hours` from now.
    pub fn in_hours(hours: i64) -> Result<Self, TransactionError> {
        let duration = TimeDelta::try_hours(hours).ok_or(TransactionError::InvalidDeadline)?;
        Self::after(Utc::now(), duration)
    }

    /// Deadline `duration` after `from`.
    ///
    /// The duration must be positive and the result must fit the calendar.
    pub fn after(from: DateTime<Utc>, duration: TimeDelta) -> Result<Self, TransactionError> {
        if duration <= TimeDelta::zero() {
            return Err(TransactionError::InvalidDeadline);
        }
        from.checked_add_signed(duration)
            .map(Self)
            .ok_or(TransactionError::InvalidDeadline)
    }

    /// Returns the deadline instant.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Transaction kind, one per metadata target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataTransactionKind {
    AccountMetadata,
    MosaicMetadata { target_mosaic_id: MosaicId },
    NamespaceMetadata { target_namespace_id: NamespaceId },
}

impl MetadataTransactionKind {
    /// Returns the display name of the transaction kind.
    pub fn name(&self) -> &'static str {
        match self {
            MetadataTransactionKind::AccountMetadata => "account_metadata",
            MetadataTransactionKind::MosaicMetadata { .. } => "mosaic_metadata",
            MetadataTransactionKind::NamespaceMetadata { .. } => "namespace_metadata",
        }
    }
}

impl From<MetadataTarget> for MetadataTransactionKind {
    fn from(target: MetadataTarget) -> Self {
        match target {
            MetadataTarget::Account => MetadataTransactionKind::AccountMetadata,
            MetadataTarget::Mosaic(target_mosaic_id) => {
                MetadataTransactionKind::MosaicMetadata { target_mosaic_id }
            }
            MetadataTarget::Namespace(target_namespace_id) => {
                MetadataTransactionKind::NamespaceMetadata {
                    target_namespace_id,
                }
            }
        }
    }
}

/// Inputs for [`MetadataTransaction::build`].
#[derive(Debug, Clone)]
pub struct MetadataTransactionParams {
    pub deadline: Deadline,
    pub network_type: NetworkType,
    pub source_address: Address,
    pub target_address: Address,
    /// Human-readable key; hashed into the scoped metadata key.
    pub scoped_key: String,
    pub value: String,
    pub target: MetadataTarget,
    /// Maximum fee in absolute units of the network currency.
    pub max_fee: u64,
}

/// An unsigned metadata transaction ready to be handed to a signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTransaction {
    pub kind: MetadataTransactionKind,
    pub deadline: Deadline,
    pub network_type: NetworkType,
    pub source_address: Address,
    pub target_address: Address,
    pub scoped_metadata_key: u64,
    pub value: Vec<u8>,
    /// Size change of the stored value; equals the value length for a new entry.
    pub value_size_delta: i16,
    pub max_fee: u64,
}

impl MetadataTransaction {
    /// Builds the transaction for the target named in `params`.
    pub fn build(params: MetadataTransactionParams) -> Result<Self, TransactionError> {
        if params.scoped_key.is_empty() {
            return Err(TransactionError::EmptyKey);
        }

        let value = params.value.into_bytes();
        if value.len() > MAX_METADATA_VALUE_SIZE {
            return Err(TransactionError::ValueTooLong {
                max: MAX_METADATA_VALUE_SIZE,
                actual: value.len(),
            });
        }

        let target_network = params.target_address.network_type();
        if target_network != params.network_type {
            return Err(TransactionError::NetworkMismatch {
                expected: params.network_type,
                actual: target_network,
            });
        }

        Ok(Self {
            kind: params.target.into(),
            deadline: params.deadline,
            network_type: params.network_type,
            source_address: params.source_address,
            target_address: params.target_address,
            scoped_metadata_key: generate_scoped_key(&params.scoped_key),
            // bounded by MAX_METADATA_VALUE_SIZE
            value_size_delta: value.len() as i16,
            value,
            max_fee: params.max_fee,
        })
    }
}
