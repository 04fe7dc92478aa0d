use crate::ports::outbound::ServerProbe;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Statuses that prove the server is up: 422 is what the query endpoint
/// answers to a bare GET.
const REACHABLE_STATUSES: [u16; 2] = [200, 422];

/// PingUseCase - checks that the configured server answers
pub struct PingUseCase<P> {
    probe: P,
}

impl<P: ServerProbe> PingUseCase<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// # Returns
    /// The status code the server answered with
    ///
    /// # Errors
    /// `RemoteCallFailed` if the server is unreachable or answers with any
    /// other status
    pub async fn execute(&self, server_addr: &str) -> Result<u16> {
        let status = self
            .probe
            .probe()
            .await
            .map_err(|e| CatalogError::remote("ping", server_addr, e))?;
        tracing::debug!(status, "server answered ping");
        if !REACHABLE_STATUSES.contains(&status) {
            return Err(CatalogError::remote(
                "ping",
                server_addr,
                anyhow::anyhow!("unexpected HTTP status {}", status),
            )
            .into());
        }
        Ok(status)
    }
}
