use super::http_client;
use crate::ports::outbound::ServerProbe;
use crate::shared::Result;
use async_trait::async_trait;

/// HttpServerProbe adapter: a plain GET on the server address
pub struct HttpServerProbe {
    client: reqwest::Client,
    server_addr: String,
}

impl HttpServerProbe {
    pub fn new(server_addr: impl Into<String>, insecure_tls: bool) -> Result<Self> {
        Ok(Self {
            client: http_client(insecure_tls)?,
            server_addr: server_addr.into(),
        })
    }
}

#[async_trait]
impl ServerProbe for HttpServerProbe {
    async fn probe(&self) -> Result<u16> {
        tracing::debug!(address = %self.server_addr, "pinging server");
        let response = self
            .client
            .get(&self.server_addr)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Error contacting server {}: {}", self.server_addr, e))?;
        Ok(response.status().as_u16())
    }
}
