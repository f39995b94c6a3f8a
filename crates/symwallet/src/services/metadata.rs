//! Metadata service.
//!
//! Serves the metadata attached to an account through the read-through
//! fetcher and builds metadata transactions.

use std::sync::Arc;

use symwallet_core::account::Address;
use symwallet_core::cache::{metadata_partition, EntityCacheStore};
use symwallet_core::metadata::{MetadataModel, MetadataType};
use symwallet_core::repository::{MetadataRepository, MetadataSearchCriteria, RemoteQueryError};
use symwallet_core::transaction::{
    MetadataTransaction, MetadataTransactionParams, TransactionError,
};

use crate::fetch::{EntityStream, ReadThrough};

/// Metadata queries and transactions for the active account.
///
/// # Type Parameters
///
/// * `R` - The remote metadata repository
/// * `S` - The cache store for metadata lists
pub struct MetadataService<R, S> {
    repository: Arc<R>,
    fetcher: ReadThrough<S>,
    page_size: u32,
}

impl<R, S> MetadataService<R, S>
where
    R: MetadataRepository + 'static,
    S: EntityCacheStore<MetadataModel> + 'static,
{
    /// Creates a new metadata service.
    ///
    /// # Arguments
    ///
    /// * `repository` - Remote source of metadata records
    /// * `store` - Cache holding the last fetched list per partition
    /// * `page_size` - Records requested from the remote
    pub fn new(repository: Arc<R>, store: Arc<S>, page_size: u32) -> Self {
        Self {
            repository,
            fetcher: ReadThrough::new(store),
            page_size,
        }
    }

    /// Streams the metadata of `metadata_type` attached to `address`.
    ///
    /// Yields the cached list first when one exists, then the first page of
    /// the remote result. Without an address or generation hash the stream
    /// yields `[]` and never contacts the node.
    pub fn metadata_list(
        &self,
        generation_hash: &str,
        address: Option<&Address>,
        metadata_type: MetadataType,
    ) -> EntityStream<MetadataModel> {
        let Some(address) = address.filter(|_| !generation_hash.is_empty()) else {
            return self
                .fetcher
                .fetch(None, async { Ok::<_, RemoteQueryError>(Vec::new()) });
        };

        let partition_key = metadata_partition(generation_hash, address, metadata_type);
        let criteria = MetadataSearchCriteria::for_target(address.clone(), metadata_type)
            .with_page_size(self.page_size)
            .with_page_number(1);
        let repository = Arc::clone(&self.repository);

        tracing::debug!(
            partition = %partition_key,
            address = %address,
            metadata_type = %metadata_type,
            "Fetching metadata"
        );

        self.fetcher.fetch(Some(partition_key), async move {
            let page = repository.search(&criteria).await?;
            Ok::<_, RemoteQueryError>(page.data.into_iter().map(MetadataModel::from).collect())
        })
    }

    /// Builds the metadata transaction described by `params`.
    pub fn metadata_transaction(
        &self,
        params: MetadataTransactionParams,
    ) -> Result<MetadataTransaction, TransactionError> {
        let transaction = MetadataTransaction::build(params)?;
        tracing::debug!(
            kind = transaction.kind.name(),
            key = transaction.scoped_metadata_key,
            size = transaction.value.len(),
            "Built metadata transaction"
        );
        Ok(transaction)
    }
}
