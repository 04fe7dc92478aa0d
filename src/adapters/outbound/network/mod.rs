/// Network adapters for the catalog server
mod archive_uploader;
mod graphql_client;
mod server_probe;

pub use archive_uploader::GraphQlArchiveUploader;
pub use graphql_client::GraphQlCatalogClient;
pub use server_probe::HttpServerProbe;

use crate::shared::Result;
use std::time::Duration;

/// Only connection setup is bounded; uploads of large archives may take long.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client shared by all catalog adapters
///
/// `insecure_tls` skips certificate verification, for catalog servers
/// running with self-signed certificates.
fn http_client(insecure_tls: bool) -> Result<reqwest::Client> {
    let version = env!("CARGO_PKG_VERSION");
    let user_agent = format!("ccli/{}", version);
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(user_agent)
        .danger_accept_invalid_certs(insecure_tls)
        .build()?;
    Ok(client)
}
