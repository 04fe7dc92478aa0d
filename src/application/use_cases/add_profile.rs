use crate::catalog::domain::CatalogId;
use crate::catalog::services::{profile_dispatcher, ProfileDispatcher};
use crate::ports::outbound::{CatalogClient, ProgressReporter, RecordReader};
use crate::shared::Result;
use std::path::Path;

/// AddProfileUseCase - attaches a profile record to the part it references
pub struct AddProfileUseCase<RR, C, PR> {
    record_reader: RR,
    client: C,
    progress_reporter: PR,
}

impl<RR, C, PR> AddProfileUseCase<RR, C, PR>
where
    RR: RecordReader,
    C: CatalogClient,
    PR: ProgressReporter,
{
    pub fn new(record_reader: RR, client: C, progress_reporter: PR) -> Self {
        Self {
            record_reader,
            client,
            progress_reporter,
        }
    }

    /// Decodes the profile at `path` and attaches it
    ///
    /// # Returns
    /// The catalog id of the part the profile was attached to
    ///
    /// # Errors
    /// - `MalformedRecord` if the discriminant is missing or the body does
    ///   not fit its kind
    /// - `MissingIdentifier` if the header names no part (no remote call made)
    /// - `NotFound` / `RemoteCallFailed` from resolution or the attach call
    pub async fn execute(&self, path: &Path) -> Result<CatalogId> {
        let raw = self.record_reader.read_record(path)?;
        let decoded = profile_dispatcher::decode(&raw, &path.display().to_string())?;
        let reference = decoded.reference()?;
        let kind = decoded.document.kind();

        self.progress_reporter.report(&format!(
            "📎 Adding {} profile to {}...",
            kind,
            decoded.header.display_name()
        ));
        let id = ProfileDispatcher::new(&self.client)
            .attach(&reference, &decoded.document)
            .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Added {} profile to {} ({})",
            kind,
            decoded.header.display_name(),
            id
        ));
        Ok(id)
    }
}
