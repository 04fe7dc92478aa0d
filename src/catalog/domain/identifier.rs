use crate::shared::error::CatalogError;
use crate::shared::CatalogResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical, server-assigned identifier of a part.
///
/// The catalog treats it as an opaque token; no format is enforced locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogId(String);

impl CatalogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three ways a part can be addressed.
///
/// Only `CatalogId` is an identity; content hash and verification code are
/// lookup keys that must be resolved before a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartReference {
    CatalogId(CatalogId),
    ContentHash(String),
    VerificationCode(String),
}

impl PartReference {
    /// Picks the addressing field of a declarative record.
    ///
    /// Blank values count as absent. When several are present the catalog id
    /// wins, then the verification code, then the content hash; exported
    /// records carry both id and code, so this keeps them editable.
    pub fn from_fields(
        catalog_id: &str,
        sha256: &str,
        fvc: &str,
        operation: &str,
    ) -> CatalogResult<Self> {
        if !catalog_id.trim().is_empty() {
            return Ok(PartReference::CatalogId(CatalogId::new(catalog_id.trim())));
        }
        if !fvc.trim().is_empty() {
            return Ok(PartReference::VerificationCode(fvc.trim().to_string()));
        }
        if !sha256.trim().is_empty() {
            return Ok(PartReference::ContentHash(sha256.trim().to_string()));
        }
        Err(CatalogError::MissingIdentifier {
            operation: operation.to_string(),
        })
    }

    /// Name of the lookup key, as used in messages and logs
    pub fn kind(&self) -> &'static str {
        match self {
            PartReference::CatalogId(_) => "catalog_id",
            PartReference::ContentHash(_) => "sha256",
            PartReference::VerificationCode(_) => "fvc",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            PartReference::CatalogId(id) => id.as_str(),
            PartReference::ContentHash(hash) => hash,
            PartReference::VerificationCode(code) => code,
        }
    }
}

impl std::fmt::Display for PartReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\"", self.kind(), self.value())
    }
}

/// Parses the `comprised_of` reference of a record.
///
/// Empty input and the nil UUID both mean "no parent".
pub fn parse_comprised_of(value: &str) -> CatalogResult<Option<Uuid>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = Uuid::parse_str(trimmed).map_err(|e| CatalogError::InvalidReference {
        field: "comprised_of".to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.is_nil() {
        return Ok(None);
    }
    Ok(Some(parsed))
}
