use crate::application::dto::{PartLookup, TemplateKind};
use crate::catalog::domain::{PartRecord, ProfileDocument, ProfileHeader};
use crate::catalog::services::record_mapper;
use crate::ports::outbound::CatalogClient;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use anyhow::Context;

/// ExportUseCase - renders declarative records as YAML
///
/// Exported parts can be edited and fed back to `update`/`set`: they carry
/// both the catalog id and the verification code.
pub struct ExportUseCase<C> {
    client: C,
}

impl<C: CatalogClient> ExportUseCase<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetches a part and renders its record
    ///
    /// # Errors
    /// - `NotFound` if the lookup matches no part
    /// - `RemoteCallFailed` if the query fails
    pub async fn export_part(&self, lookup: &PartLookup) -> Result<String> {
        tracing::debug!("retrieving part by {}", lookup.describe());
        let found = match lookup {
            PartLookup::Id(id) => self.client.part_by_id(id).await,
            PartLookup::Sha256(sha256) => self.client.part_by_sha256(sha256).await,
            PartLookup::Fvc(fvc) => self.client.part_by_fvc(fvc).await,
        }
        .map_err(|e| CatalogError::remote("part", lookup.describe(), e))?;

        let part = found
            .filter(|part| !part.id.is_empty())
            .ok_or_else(|| {
                let (key, value) = match lookup {
                    PartLookup::Id(id) => ("catalog_id", id.to_string()),
                    PartLookup::Sha256(sha256) => ("sha256", sha256.clone()),
                    PartLookup::Fvc(fvc) => ("fvc", fvc.clone()),
                };
                CatalogError::NotFound {
                    lookup: key.to_string(),
                    value,
                }
            })?;

        let mut record = record_mapper::to_local_part(&part);
        if let PartLookup::Sha256(sha256) = lookup {
            record.sha256 = sha256.clone();
        }
        render_part(&record)
    }
}

fn render_part(record: &PartRecord) -> Result<String> {
    serde_yaml_ng::to_string(record).context("Failed to serialize part record")
}

/// Renders an empty record of `kind`, for filling in by hand
///
/// # Errors
/// Returns an error if serialization fails
pub fn render_template(kind: &TemplateKind) -> Result<String> {
    let profile_kind = match kind {
        TemplateKind::Part => return render_part(&PartRecord::template()),
        TemplateKind::Profile(profile_kind) => profile_kind,
    };

    let body = ProfileDocument::template(profile_kind).ok_or_else(|| {
        anyhow::anyhow!("No template exists for profile kind \"{}\"", profile_kind)
    })?;
    let mut document = serde_json::to_value(ProfileHeader::template(profile_kind))
        .context("Failed to serialize profile header")?;
    if let (Some(fields), serde_json::Value::Object(entries)) =
        (
            document.as_object_mut(),
            body.to_record_fields()
                .context("Failed to serialize profile body")?,
        )
    {
        fields.extend(entries);
    }
    serde_yaml_ng::to_string(&document).context("Failed to serialize profile template")
}
