use super::follow_ups;
use crate::application::dto::{MutationReport, UpdateMode};
use crate::catalog::domain::{parse_comprised_of, PartReference};
use crate::catalog::services::{record_mapper, IdentifierResolver};
use crate::ports::outbound::{CatalogClient, ProgressReporter, RecordReader};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::path::Path;

/// UpdatePartUseCase - applies an edited record to an existing part
///
/// The record addresses its part by catalog_id, fvc or sha256; anything but a
/// catalog id is resolved first. Aliases listed in the record are appended
/// afterwards and never removed.
pub struct UpdatePartUseCase<RR, C, PR> {
    record_reader: RR,
    client: C,
    progress_reporter: PR,
}

impl<RR, C, PR> UpdatePartUseCase<RR, C, PR>
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

    /// Applies the record at `path`
    ///
    /// # Arguments
    /// * `path` - Declarative part record
    /// * `mode` - Sparse update or full overwrite
    ///
    /// # Errors
    /// - `MissingIdentifier` if the record names no part (no remote call made)
    /// - `InvalidReference` for a malformed `comprised_of` (no remote call made)
    /// - `NotFound` if the hash or code does not resolve
    /// - `RemoteCallFailed` for the mutation or a follow-up call
    pub async fn execute(&self, path: &Path, mode: UpdateMode) -> Result<MutationReport> {
        let origin = path.display().to_string();
        let raw = self.record_reader.read_record(path)?;
        let record = record_mapper::decode_part(&raw, &origin)?;
        let reference = PartReference::from_fields(
            &record.catalog_id,
            &record.sha256,
            &record.fvc,
            mode.operation(),
        )?;
        parse_comprised_of(&record.comprised_of)?;

        let id = IdentifierResolver::new(&self.client)
            .resolve(&reference)
            .await?;
        self.progress_reporter.report(&format!(
            "✏️  Applying {} to part {} ({})...",
            mode.operation(),
            id,
            record.display_name()
        ));

        let subject = format!("part {}", id);
        let part = match mode {
            UpdateMode::Sparse => {
                let input = record_mapper::to_update_input(&record, id)?;
                tracing::debug!(catalog_id = %input.id, "updating part");
                self.client
                    .update_part(&input)
                    .await
                    .map_err(|e| CatalogError::remote("updatePart", subject, e))?
            }
            UpdateMode::Overwrite => {
                let input = record_mapper::to_set_input(&record, id)?;
                tracing::debug!(catalog_id = %input.id, "overwriting part");
                self.client
                    .set_part(&input)
                    .await
                    .map_err(|e| CatalogError::remote("setPart", subject, e))?
            }
        };

        let mut report = MutationReport::new(part);
        let planned = follow_ups::plan(record_mapper::plan_aliases(&record), Vec::new());
        follow_ups::apply(
            &self.client,
            &self.progress_reporter,
            &mut report,
            planned,
            "updated",
        )
        .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Part {} updated",
            report.catalog_id()
        ));
        Ok(report)
    }
}
