//! Metadata search.

use async_trait::async_trait;

use symwallet_core::metadata::Metadata;
use symwallet_core::repository::{self, MetadataRepository, MetadataSearchCriteria, Page};

use super::NodeClient;
use crate::dto::{search_query, MetadataPageDto};
use crate::error::Result;

impl NodeClient {
    /// Search metadata entries.
    pub async fn search_metadata(&self, criteria: &MetadataSearchCriteria) -> Result<Page<Metadata>> {
        let query = search_query(criteria);
        tracing::debug!(base_url = %self.base_url, ?query, "Searching metadata");

        let response = self
            .client
            .get(self.url("/metadata"))
            .query(&query)
            .send()
            .await?;
        let dto: MetadataPageDto = self.handle_response(response).await?;

        Page::try_from(dto)
    }
}

#[async_trait]
impl MetadataRepository for NodeClient {
    async fn search(&self, criteria: &MetadataSearchCriteria) -> repository::Result<Page<Metadata>> {
        self.search_metadata(criteria).await.map_err(Into::into)
    }
}
