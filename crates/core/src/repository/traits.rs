use async_trait::async_trait;

use crate::metadata::Metadata;

use super::{MetadataSearchCriteria, Page, Result};

/// Remote source of truth for metadata records.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Searches metadata entries matching `criteria`.
    ///
    /// Returns a single page; records keep the server's order.
    async fn search(&self, criteria: &MetadataSearchCriteria) -> Result<Page<Metadata>>;
}
