use super::graphql_client::{decode_envelope, take_field, GraphQlResponse};
use super::http_client;
use crate::ports::outbound::{ArchiveUploader, UploadReceipt};
use crate::shared::error::CatalogError;
use crate::shared::security::{validate_regular_file, MAX_ARCHIVE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::json;
use std::path::Path;

const UPLOAD_MUTATION: &str = "mutation($file: Upload!) { \
    uploadArchive(file: $file) { name insert_date sha256 sha1 part_id } }";

/// Multipart field carrying the file; referenced from the `map` field
const FILE_FIELD: &str = "0";

/// GraphQlArchiveUploader adapter for archive uploads
///
/// Follows the GraphQL multipart request convention: an `operations` field
/// with the mutation and a `null` file variable, a `map` field binding the
/// file part to that variable, then the file itself.
pub struct GraphQlArchiveUploader {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQlArchiveUploader {
    pub fn new(endpoint: impl Into<String>, insecure_tls: bool) -> Result<Self> {
        Ok(Self {
            client: http_client(insecure_tls)?,
            endpoint: endpoint.into(),
        })
    }

    fn operations() -> String {
        json!({
            "query": UPLOAD_MUTATION,
            "variables": { "file": null },
        })
        .to_string()
    }

    fn file_map() -> String {
        json!({ FILE_FIELD: ["variables.file"] }).to_string()
    }
}

#[async_trait]
impl ArchiveUploader for GraphQlArchiveUploader {
    async fn upload(&self, path: &Path) -> Result<UploadReceipt> {
        let size = validate_regular_file(path, MAX_ARCHIVE_SIZE)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| CatalogError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), bytes = size, "uploading archive");

        // Streamed from disk, never buffered whole.
        let form = Form::new()
            .text("operations", Self::operations())
            .text("map", Self::file_map())
            .part(
                FILE_FIELD,
                Part::stream_with_length(file, size).file_name(file_name),
            );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Server responded with status {}", status);
        }

        let envelope: GraphQlResponse = response.json().await?;
        let receipt: Option<UploadReceipt> =
            take_field(decode_envelope(envelope)?, "uploadArchive")?;
        receipt.ok_or_else(|| anyhow::anyhow!("Server returned no upload result"))
    }
}
