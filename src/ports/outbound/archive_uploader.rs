use super::catalog_schema::UploadReceipt;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ArchiveUploader port for sending an archive to the catalog
///
/// The server is authoritative for the content hash, verification code and
/// part linkage; the client never computes them.
#[async_trait]
pub trait ArchiveUploader: Send + Sync {
    /// Uploads the archive at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the transport fails, or
    /// the server reports errors for the upload
    async fn upload(&self, path: &Path) -> Result<UploadReceipt>;
}
