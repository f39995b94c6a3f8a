//! Node information.

use super::NodeClient;
use crate::dto::NodeInfoDto;
use crate::error::Result;

impl NodeClient {
    /// Get node information.
    pub async fn node_info(&self) -> Result<NodeInfoDto> {
        let response = self.client.get(self.url("/node/info")).send().await?;
        self.handle_response(response).await
    }

    /// Get the generation hash seed identifying the node's network.
    pub async fn generation_hash(&self) -> Result<String> {
        Ok(self.node_info().await?.network_generation_hash_seed)
    }
}
