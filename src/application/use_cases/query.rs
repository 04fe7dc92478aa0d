use crate::ports::outbound::CatalogClient;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// QueryUseCase - runs caller-written query text unchanged
pub struct QueryUseCase<C> {
    client: C,
}

impl<C: CatalogClient> QueryUseCase<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// # Errors
    /// `RemoteCallFailed` if the server rejects the query or the call fails
    pub async fn execute(&self, query: &str) -> Result<serde_json::Value> {
        if query.trim().is_empty() {
            anyhow::bail!("Query text is empty");
        }
        tracing::debug!(query = %query, "executing raw query");
        let response = self
            .client
            .raw_query(query)
            .await
            .map_err(|e| CatalogError::remote("query", "caller-supplied query", e))?;
        Ok(response)
    }
}
