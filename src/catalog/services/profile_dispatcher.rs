//! Routing of profile records by their `profile` discriminant.

use super::resolver::IdentifierResolver;
use crate::catalog::domain::{
    CatalogId, LicenseAnalysis, LicensingProfile, PartReference, ProfileDocument, ProfileHeader,
    ProfileKind, QualityProfile, SecurityProfile,
};
use crate::ports::outbound::CatalogClient;
use crate::shared::error::CatalogError;
use crate::shared::CatalogResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value as YamlValue;

/// A profile record split into its header and its typed body
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedProfile {
    pub header: ProfileHeader,
    pub document: ProfileDocument,
}

impl DecodedProfile {
    /// Reference to the owning part taken from the header
    ///
    /// # Errors
    /// `MissingIdentifier` if none of catalog_id, fvc or sha256 is set.
    pub fn reference(&self) -> CatalogResult<PartReference> {
        PartReference::from_fields(
            &self.header.catalog_id,
            &self.header.sha256,
            &self.header.fvc,
            "add profile",
        )
    }
}

// Typed parts are read from the text itself; a parsed `Value` has already
// turned bare scalars such as `1.10` into numbers.
fn decode_body<T: DeserializeOwned>(raw: &str, origin: &str) -> CatalogResult<T> {
    serde_yaml_ng::from_str(raw).map_err(|e| CatalogError::malformed(origin, e))
}

/// Decodes a raw profile record.
///
/// The discriminant is read first; the same document is then decoded again
/// against the schema it names. Unknown kinds are not an error: their body,
/// minus the header keys, is carried as an opaque document.
///
/// # Errors
/// `MalformedRecord` if the text is not a mapping, the discriminant is
/// missing, or the body does not fit the schema of its kind.
pub fn decode(raw: &str, origin: &str) -> CatalogResult<DecodedProfile> {
    let value: YamlValue =
        serde_yaml_ng::from_str(raw).map_err(|e| CatalogError::malformed(origin, e))?;
    if !value.is_mapping() {
        return Err(CatalogError::malformed(
            origin,
            "a profile record must be a mapping of fields",
        ));
    }

    let header: ProfileHeader = decode_body(raw, origin)?;
    if header.profile.trim().is_empty() {
        return Err(CatalogError::malformed(
            origin,
            "missing `profile` field (security, quality, licensing or a custom kind)",
        ));
    }

    let document = match header.kind() {
        ProfileKind::Security => ProfileDocument::Security(decode_body(raw, origin)?),
        ProfileKind::Quality => ProfileDocument::Quality(decode_body(raw, origin)?),
        ProfileKind::Licensing => ProfileDocument::Licensing(decode_body(raw, origin)?),
        ProfileKind::Other(kind) => {
            let body: serde_yaml_ng::Mapping = value
                .as_mapping()
                .into_iter()
                .flat_map(|mapping| mapping.iter())
                .filter(|(key, _)| {
                    !key.as_str()
                        .is_some_and(|key| ProfileHeader::FIELDS.contains(&key))
                })
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            let body = serde_json::to_value(&body).map_err(|e| CatalogError::malformed(origin, e))?;
            tracing::debug!(kind = %kind, "passing through profile of unknown kind");
            ProfileDocument::Opaque { kind, body }
        }
    };

    Ok(DecodedProfile { header, document })
}

/// Licensing body as stored by the catalog. The record file says
/// `legal_notice`; documents in the catalog say `legal_notices`.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct LicensingDocument {
    license_analysis: Vec<LicenseAnalysis>,
    copyrights: Vec<String>,
    #[serde(rename = "legal_notices", alias = "legal_notice")]
    legal_notice: String,
    other_legal_notices: Vec<String>,
}

impl Default for LicensingDocument {
    fn default() -> Self {
        LicensingProfile::default().into()
    }
}

impl From<LicensingProfile> for LicensingDocument {
    fn from(profile: LicensingProfile) -> Self {
        Self {
            license_analysis: profile.license_analysis,
            copyrights: profile.copyrights,
            legal_notice: profile.legal_notice,
            other_legal_notices: profile.other_legal_notices,
        }
    }
}

impl From<LicensingDocument> for LicensingProfile {
    fn from(document: LicensingDocument) -> Self {
        Self {
            license_analysis: document.license_analysis,
            copyrights: document.copyrights,
            legal_notice: document.legal_notice,
            other_legal_notices: document.other_legal_notices,
        }
    }
}

/// Encodes a typed body into the generic document sent with attachDocument.
///
/// # Errors
/// `MalformedRecord` if the body cannot be represented as JSON.
pub fn encode(document: &ProfileDocument) -> CatalogResult<serde_json::Value> {
    let encoded = match document {
        ProfileDocument::Licensing(profile) => {
            serde_json::to_value(LicensingDocument::from(profile.clone()))
        }
        other => other.to_record_fields(),
    };
    encoded.map_err(|e| CatalogError::malformed(document.kind().as_str(), e))
}

/// Decodes a generic document, as stored by the catalog, back into the
/// typed body of `kind`.
///
/// # Errors
/// `MalformedRecord` if the document does not fit the schema of `kind`.
pub fn decode_document(
    kind: &ProfileKind,
    document: &serde_json::Value,
) -> CatalogResult<ProfileDocument> {
    fn typed<T: DeserializeOwned>(kind: &ProfileKind, value: &serde_json::Value) -> CatalogResult<T> {
        T::deserialize(value).map_err(|e| CatalogError::malformed(kind.as_str(), e))
    }

    Ok(match kind {
        ProfileKind::Security => ProfileDocument::Security(typed::<SecurityProfile>(kind, document)?),
        ProfileKind::Quality => ProfileDocument::Quality(typed::<QualityProfile>(kind, document)?),
        ProfileKind::Licensing => {
            ProfileDocument::Licensing(typed::<LicensingDocument>(kind, document)?.into())
        }
        ProfileKind::Other(name) => ProfileDocument::Opaque {
            kind: name.clone(),
            body: document.clone(),
        },
    })
}

/// Attaches decoded profiles to the parts they reference.
pub struct ProfileDispatcher<'a, C: CatalogClient + ?Sized> {
    client: &'a C,
    resolver: IdentifierResolver<'a, C>,
}

impl<'a, C: CatalogClient + ?Sized> ProfileDispatcher<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            resolver: IdentifierResolver::new(client),
        }
    }

    /// Resolves `reference` and attaches `document` under its kind.
    ///
    /// A catalog id reference costs no lookup. Returns the id the document
    /// was attached to.
    ///
    /// # Errors
    /// - `NotFound` if the hash or code does not resolve
    /// - `MalformedRecord` if the body cannot be encoded
    /// - `RemoteCallFailed` if a call fails or the server declines the attach
    pub async fn attach(
        &self,
        reference: &PartReference,
        document: &ProfileDocument,
    ) -> CatalogResult<CatalogId> {
        let id = self.resolver.resolve(reference).await?;
        let kind = document.kind();
        let encoded = encode(document)?;

        tracing::debug!(catalog_id = %id, kind = %kind, "attaching profile document");
        let subject = format!("part {} ({})", id, kind);
        let attached = self
            .client
            .attach_document(&id, kind.as_str(), &encoded)
            .await
            .map_err(|e| CatalogError::remote("attachDocument", subject.clone(), e))?;
        if !attached {
            return Err(CatalogError::remote(
                "attachDocument",
                subject,
                anyhow::anyhow!("server did not accept the document"),
            ));
        }
        Ok(id)
    }
}
