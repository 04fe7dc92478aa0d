use crate::shared::Result;
use async_trait::async_trait;

/// ServerProbe port for checking that the catalog server answers
#[async_trait]
pub trait ServerProbe: Send + Sync {
    /// Returns the HTTP status code of a plain request to the server address
    async fn probe(&self) -> Result<u16>;
}
