use super::follow_ups;
use crate::application::dto::MutationReport;
use crate::catalog::services::record_mapper;
use crate::ports::outbound::{CatalogClient, ProgressReporter, RecordReader};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::path::Path;

/// AddPartUseCase - creates a part from a declarative record
///
/// The primary create carries only the scalar fields. Aliases and composite
/// children are separate calls issued afterwards, in input order.
///
/// # Type Parameters
/// * `RR` - RecordReader implementation
/// * `C` - CatalogClient implementation
/// * `PR` - ProgressReporter implementation
pub struct AddPartUseCase<RR, C, PR> {
    record_reader: RR,
    client: C,
    progress_reporter: PR,
}

impl<RR, C, PR> AddPartUseCase<RR, C, PR>
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

    /// Creates the part described by the record at `path`
    ///
    /// # Errors
    /// - The record cannot be read or decoded
    /// - `comprised_of` is not a valid reference (before any remote call)
    /// - The create call or a follow-up call fails
    pub async fn execute(&self, path: &Path) -> Result<MutationReport> {
        let origin = path.display().to_string();
        let raw = self.record_reader.read_record(path)?;
        let record = record_mapper::decode_part(&raw, &origin)?;
        let input = record_mapper::to_create_input(&record)?;
        let planned = follow_ups::plan(
            record_mapper::plan_aliases(&record),
            record_mapper::plan_composite_links(&record.composite_list),
        );

        self.progress_reporter
            .report(&format!("📦 Adding part {}...", record.display_name()));
        tracing::debug!(name = %record.name, version = %record.version, "creating part");

        let part = self
            .client
            .create_part(&input)
            .await
            .map_err(|e| CatalogError::remote("createPart", record.display_name(), e))?;
        tracing::debug!(catalog_id = %part.id, "part created");

        let mut report = MutationReport::new(part);
        follow_ups::apply(
            &self.client,
            &self.progress_reporter,
            &mut report,
            planned,
            "created",
        )
        .await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Part {} added with catalog id {}",
            record.display_name(),
            report.catalog_id()
        ));
        Ok(report)
    }
}
