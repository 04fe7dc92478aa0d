use crate::ports::outbound::{ArchiveUploader, ProgressReporter, UploadReceipt};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::path::Path;

/// UploadArchiveUseCase - sends an archive and reports what the server
/// derived from it
pub struct UploadArchiveUseCase<U, PR> {
    uploader: U,
    progress_reporter: PR,
}

impl<U, PR> UploadArchiveUseCase<U, PR>
where
    U: ArchiveUploader,
    PR: ProgressReporter,
{
    pub fn new(uploader: U, progress_reporter: PR) -> Self {
        Self {
            uploader,
            progress_reporter,
        }
    }

    /// # Errors
    /// `RemoteCallFailed` naming the archive path if the upload fails
    pub async fn execute(&self, path: &Path) -> Result<UploadReceipt> {
        self.progress_reporter
            .report(&format!("⬆️  Uploading {}...", path.display()));
        tracing::debug!(path = %path.display(), "uploading archive");

        let receipt = self
            .uploader
            .upload(path)
            .await
            .map_err(|e| CatalogError::remote("uploadArchive", path.display().to_string(), e))?;

        match receipt.part_id.as_deref() {
            Some(part_id) if !part_id.is_empty() => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Uploaded {} (sha256 {}) as part {}",
                    receipt.name, receipt.sha256, part_id
                ))
            }
            _ => self.progress_reporter.report_completion(&format!(
                "✅ Uploaded {} (sha256 {})",
                receipt.name, receipt.sha256
            )),
        }
        Ok(receipt)
    }
}
