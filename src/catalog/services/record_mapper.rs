//! Mapping between declarative part records and the catalog's wire shapes.

use crate::catalog::domain::{
    parse_comprised_of, CatalogId, CompositeEntry, LicenseDeclaration, PartRecord, RECORD_FORMAT,
};
use crate::ports::outbound::{CreatePartInput, RemotePart, SetPartInput, UpdatePartInput};
use crate::shared::error::CatalogError;
use crate::shared::CatalogResult;
use std::collections::HashSet;
use uuid::Uuid;

/// Decodes a declarative part record from its YAML text.
///
/// # Errors
/// `MalformedRecord` naming `origin` if the text does not fit the record.
pub fn decode_part(raw: &str, origin: &str) -> CatalogResult<PartRecord> {
    if raw.trim().is_empty() {
        return Err(CatalogError::malformed(origin, "record file is empty"));
    }
    serde_yaml_ng::from_str(raw).map_err(|e| CatalogError::malformed(origin, e))
}

/// Converts a part returned by the catalog into its declarative record.
///
/// A zero size is written as an empty value, and a nil or missing parent
/// reference leaves `comprised_of` empty.
pub fn to_local_part(remote: &RemotePart) -> PartRecord {
    let size = if remote.size != 0 {
        remote.size.to_string()
    } else {
        String::new()
    };

    let comprised_of = remote
        .comprised
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter(|value| Uuid::parse_str(value).map_or(true, |uuid| !uuid.is_nil()))
        .unwrap_or_default()
        .to_string();

    PartRecord {
        format: RECORD_FORMAT,
        fvc: remote.file_verification_code.clone(),
        sha256: String::new(),
        catalog_id: remote.id.clone(),
        name: remote.name.clone(),
        version: remote.version.clone(),
        part_type: remote.part_type.clone(),
        content_type: remote.content_type.clone(),
        family_name: remote.family_name.clone(),
        label: remote.label.clone(),
        description: remote.description.clone(),
        home_page: remote.home_page.clone(),
        license: LicenseDeclaration {
            license_expression: remote.license.clone(),
            analysis_type: remote.license_rationale.clone(),
        },
        size,
        aliases: remote.aliases.clone(),
        comprised_of,
        composite_list: Vec::new(),
    }
}

/// Builds the create-part payload.
///
/// # Errors
/// `InvalidReference` if `comprised_of` is set but is not a UUID.
pub fn to_create_input(record: &PartRecord) -> CatalogResult<CreatePartInput> {
    Ok(CreatePartInput {
        part_type: record.part_type.clone(),
        content_type: record.content_type.clone(),
        name: record.name.clone(),
        version: record.version.clone(),
        label: record.label.clone(),
        family_name: record.family_name.clone(),
        license: record.license.license_expression.clone(),
        license_rationale: record.license.analysis_type.clone(),
        description: record.description.clone(),
        home_page: record.home_page.clone(),
        comprised: parse_comprised_of(&record.comprised_of)?,
    })
}

fn supplied(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Builds the sparse update payload: only non-empty fields are carried, so
/// a partially filled record never clears server state.
///
/// # Errors
/// `InvalidReference` if `comprised_of` is set but is not a UUID.
pub fn to_update_input(record: &PartRecord, id: CatalogId) -> CatalogResult<UpdatePartInput> {
    Ok(UpdatePartInput {
        id,
        part_type: supplied(&record.part_type),
        content_type: supplied(&record.content_type),
        name: supplied(&record.name),
        version: supplied(&record.version),
        label: supplied(&record.label),
        family_name: supplied(&record.family_name),
        license: supplied(&record.license.license_expression),
        license_rationale: supplied(&record.license.analysis_type),
        description: supplied(&record.description),
        home_page: supplied(&record.home_page),
        comprised: parse_comprised_of(&record.comprised_of)?,
    })
}

/// Builds the full-overwrite payload: every modeled field is carried,
/// empty values included.
///
/// # Errors
/// `InvalidReference` if `comprised_of` is set but is not a UUID.
pub fn to_set_input(record: &PartRecord, id: CatalogId) -> CatalogResult<SetPartInput> {
    Ok(SetPartInput {
        id,
        part_type: record.part_type.clone(),
        content_type: record.content_type.clone(),
        name: record.name.clone(),
        version: record.version.clone(),
        label: record.label.clone(),
        family_name: record.family_name.clone(),
        license: record.license.license_expression.clone(),
        license_rationale: record.license.analysis_type.clone(),
        description: record.description.clone(),
        home_page: record.home_page.clone(),
        comprised: parse_comprised_of(&record.comprised_of)?,
    })
}

/// Aliases to create after the primary mutation, in input order; blank
/// entries are skipped.
pub fn plan_aliases(record: &PartRecord) -> Vec<String> {
    record
        .aliases
        .iter()
        .map(|alias| alias.trim())
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}

/// Composite links to create after the primary create, in input order.
/// Entries whose path was already seen are dropped; the first one wins.
pub fn plan_composite_links(entries: &[CompositeEntry]) -> Vec<CompositeEntry> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.path().to_string()))
        .cloned()
        .collect()
}
