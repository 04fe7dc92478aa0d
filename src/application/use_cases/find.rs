use crate::application::dto::FindRequest;
use crate::catalog::domain::{CatalogId, PartReference};
use crate::catalog::services::IdentifierResolver;
use crate::ports::outbound::{CatalogClient, ProgressReporter};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// FindUseCase - read-only lookups against the catalog
///
/// Results come back as generic JSON documents, ready for whichever
/// formatter the caller picked.
pub struct FindUseCase<C, PR> {
    client: C,
    progress_reporter: PR,
}

fn to_document<T: serde::Serialize>(value: &T, subject: &str) -> Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| CatalogError::malformed(subject, e).into())
}

impl<C, PR> FindUseCase<C, PR>
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

    /// Runs the lookup
    ///
    /// # Returns
    /// The document to print, or `None` when the search matched nothing
    /// (already reported to the user)
    ///
    /// # Errors
    /// - `NotFound` if an id, hash or code matches no part
    /// - `RemoteCallFailed` if the query fails
    pub async fn execute(&self, request: &FindRequest) -> Result<Option<serde_json::Value>> {
        match request {
            FindRequest::Text(query) => {
                tracing::debug!(query = %query, "searching parts");
                let parts = self
                    .client
                    .search_parts(query)
                    .await
                    .map_err(|e| CatalogError::remote("find_archive", format!("query \"{}\"", query), e))?;
                if parts.is_empty() {
                    self.progress_reporter
                        .report(&format!("No parts found for \"{}\"", query));
                    return Ok(None);
                }
                Ok(Some(to_document(&parts, "search results")?))
            }
            FindRequest::Id(id) => {
                tracing::debug!(catalog_id = %id, "retrieving part by id");
                let part = self
                    .client
                    .part_by_id(id)
                    .await
                    .map_err(|e| CatalogError::remote("part", format!("catalog_id \"{}\"", id), e))?
                    .ok_or_else(|| CatalogError::NotFound {
                        lookup: "catalog_id".to_string(),
                        value: id.to_string(),
                    })?;
                Ok(Some(to_document(&part, "part")?))
            }
            FindRequest::Sha256(sha256) => {
                self.part_id(PartReference::ContentHash(sha256.clone()))
                    .await
            }
            FindRequest::Fvc(fvc) => {
                self.part_id(PartReference::VerificationCode(fvc.clone()))
                    .await
            }
            FindRequest::Profile { kind, id } => {
                tracing::debug!(catalog_id = %id, kind = %kind, "retrieving profile");
                let documents = self
                    .client
                    .profile(id, kind.as_str())
                    .await
                    .map_err(|e| {
                        CatalogError::remote("profile", format!("part {} ({})", id, kind), e)
                    })?;
                if documents.is_empty() {
                    self.progress_reporter.report("No documents found");
                    return Ok(None);
                }
                Ok(Some(to_document(&documents, "profile")?))
            }
        }
    }

    async fn part_id(&self, reference: PartReference) -> Result<Option<serde_json::Value>> {
        let id: CatalogId = IdentifierResolver::new(&self.client)
            .resolve(&reference)
            .await?;
        Ok(Some(serde_json::json!({ "catalog_id": id })))
    }
}
