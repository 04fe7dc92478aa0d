//! Input and output shapes of the catalog's query/mutation schema.

use crate::catalog::domain::CatalogId;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// The schema returns `null` for unset scalars; treat it as the zero value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Part as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemotePart {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub part_type: String,
    #[serde(deserialize_with = "nullable")]
    pub content_type: String,
    #[serde(deserialize_with = "nullable")]
    pub version: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub label: String,
    #[serde(deserialize_with = "nullable")]
    pub family_name: String,
    #[serde(deserialize_with = "nullable")]
    pub file_verification_code: String,
    #[serde(deserialize_with = "nullable")]
    pub size: i64,
    #[serde(deserialize_with = "nullable")]
    pub license: String,
    #[serde(deserialize_with = "nullable")]
    pub license_rationale: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub home_page: String,
    pub comprised: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub aliases: Vec<String>,
}

impl RemotePart {
    pub fn catalog_id(&self) -> CatalogId {
        CatalogId::new(self.id.clone())
    }
}

/// Archive (uploaded content) record, used to map a content hash to a part
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteArchive {
    #[serde(deserialize_with = "nullable")]
    pub sha256: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub part_id: Option<String>,
}

/// Payload of the create-part mutation.
///
/// Aliases and composite children are not part of it; they are applied by
/// follow-up calls once the part exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePartInput {
    #[serde(rename = "type")]
    pub part_type: String,
    pub content_type: String,
    pub name: String,
    pub version: String,
    pub label: String,
    pub family_name: String,
    pub license: String,
    pub license_rationale: String,
    pub description: String,
    pub home_page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comprised: Option<Uuid>,
}

/// Payload of the sparse update mutation: absent fields are never sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePartInput {
    pub id: CatalogId,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub part_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comprised: Option<Uuid>,
}

impl UpdatePartInput {
    pub fn new(id: CatalogId) -> Self {
        Self {
            id,
            part_type: None,
            content_type: None,
            name: None,
            version: None,
            label: None,
            family_name: None,
            license: None,
            license_rationale: None,
            description: None,
            home_page: None,
            comprised: None,
        }
    }
}

/// Payload of the full-overwrite mutation: every field is sent, empty
/// values and a `null` parent included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetPartInput {
    pub id: CatalogId,
    #[serde(rename = "type")]
    pub part_type: String,
    pub content_type: String,
    pub name: String,
    pub version: String,
    pub label: String,
    pub family_name: String,
    pub license: String,
    pub license_rationale: String,
    pub description: String,
    pub home_page: String,
    pub comprised: Option<Uuid>,
}

/// Flags of the delete-part mutation; both default to off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    pub recursive: bool,
    pub force: bool,
}

/// One document of a part profile, as returned by the profile query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub document: serde_json::Value,
}

/// Result of an archive upload, as reported by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadReceipt {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub insert_date: String,
    #[serde(deserialize_with = "nullable")]
    pub sha256: String,
    #[serde(deserialize_with = "nullable")]
    pub sha1: String,
    pub part_id: Option<String>,
}
