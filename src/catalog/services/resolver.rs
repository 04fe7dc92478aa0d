use crate::catalog::domain::{CatalogId, PartReference};
use crate::ports::outbound::CatalogClient;
use crate::shared::error::CatalogError;
use crate::shared::CatalogResult;

/// The catalog reports "no part linked" with a nil identifier in some
/// responses instead of `null`.
const NIL_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Normalizes any part reference into a canonical catalog id.
///
/// A catalog id is returned as-is without touching the network; a content
/// hash or verification code costs exactly one lookup. Nothing is cached, so
/// callers that need the id twice keep the returned value.
pub struct IdentifierResolver<'a, C: CatalogClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: CatalogClient + ?Sized> IdentifierResolver<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Resolves `reference` to the id of the part it addresses
    ///
    /// # Errors
    /// - `NotFound` if the lookup matched nothing
    /// - `RemoteCallFailed` if the lookup call itself failed
    pub async fn resolve(&self, reference: &PartReference) -> CatalogResult<CatalogId> {
        let (operation, found) = match reference {
            PartReference::CatalogId(id) => {
                tracing::debug!(catalog_id = %id, "using catalog id without lookup");
                return Ok(id.clone());
            }
            PartReference::ContentHash(sha256) => {
                tracing::debug!(sha256 = %sha256, "resolving part by content hash");
                ("archive", self.client.part_id_by_sha256(sha256).await)
            }
            PartReference::VerificationCode(fvc) => {
                tracing::debug!(fvc = %fvc, "resolving part by verification code");
                ("part", self.client.part_id_by_fvc(fvc).await)
            }
        };

        let found = found.map_err(|e| {
            tracing::debug!(error = %e, "lookup failed for {}", reference);
            CatalogError::remote(operation, reference.to_string(), e)
        })?;

        match found {
            Some(id) if !id.as_str().is_empty() && id.as_str() != NIL_ID => {
                tracing::debug!(catalog_id = %id, "resolved {}", reference);
                Ok(id)
            }
            _ => Err(CatalogError::NotFound {
                lookup: reference.kind().to_string(),
                value: reference.value().to_string(),
            }),
        }
    }
}
