use crate::catalog::domain::CatalogId;
use crate::ports::outbound::{CatalogClient, DeleteOptions, ProgressReporter};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// DeletePartUseCase - removes a part by catalog id
///
/// Issues exactly one call; `recursive` and `force` are passed through as
/// given and both default to off.
pub struct DeletePartUseCase<C, PR> {
    client: C,
    progress_reporter: PR,
}

impl<C, PR> DeletePartUseCase<C, PR>
where
    C: CatalogClient,
    PR: ProgressReporter,
{
    pub fn new(client: C, progress_reporter: PR) -> Self {
        Self {
            client,
            progress_reporter,
        }
    }

    /// # Errors
    /// `RemoteCallFailed` if the call fails or the server reports the part
    /// was not deleted
    pub async fn execute(&self, id: &CatalogId, options: DeleteOptions) -> Result<()> {
        tracing::debug!(
            catalog_id = %id,
            recursive = options.recursive,
            force = options.force,
            "deleting part"
        );
        let subject = format!("part {}", id);
        let deleted = self
            .client
            .delete_part(id, options)
            .await
            .map_err(|e| CatalogError::remote("deletePart", subject.clone(), e))?;
        if !deleted {
            return Err(CatalogError::remote(
                "deletePart",
                subject,
                anyhow::anyhow!("server reported the part was not deleted"),
            )
            .into());
        }

        self.progress_reporter
            .report_completion(&format!("🗑️  Deleted part {}", id));
        Ok(())
    }
}
