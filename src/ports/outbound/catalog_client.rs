use super::catalog_schema::{
    CreatePartInput, DeleteOptions, ProfileEntry, RemotePart, SetPartInput, UpdatePartInput,
};
use crate::catalog::domain::CatalogId;
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogClient port for the catalog's typed query/mutation API
///
/// Each method is one named remote operation and issues exactly one call.
/// Implementations do not retry and do not cache; lookups that match nothing
/// return `Ok(None)` so callers can report which value failed to resolve.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Looks up the archive with this content hash and returns its part id
    async fn part_id_by_sha256(&self, sha256: &str) -> Result<Option<CatalogId>>;

    /// Looks up the part with this file verification code and returns its id
    async fn part_id_by_fvc(&self, fvc: &str) -> Result<Option<CatalogId>>;

    async fn part_by_id(&self, id: &CatalogId) -> Result<Option<RemotePart>>;

    async fn part_by_sha256(&self, sha256: &str) -> Result<Option<RemotePart>>;

    async fn part_by_fvc(&self, fvc: &str) -> Result<Option<RemotePart>>;

    /// Free-text search over archive names
    async fn search_parts(&self, query: &str) -> Result<Vec<RemotePart>>;

    async fn create_part(&self, input: &CreatePartInput) -> Result<RemotePart>;

    /// Sparse update: only the fields present in `input` are changed
    async fn update_part(&self, input: &UpdatePartInput) -> Result<RemotePart>;

    /// Full overwrite of every modeled field
    async fn set_part(&self, input: &SetPartInput) -> Result<RemotePart>;

    async fn delete_part(&self, id: &CatalogId, options: DeleteOptions) -> Result<bool>;

    async fn create_alias(&self, id: &CatalogId, alias: &str) -> Result<()>;

    /// Records `child` as a constituent of `parent` at the relative `path`
    async fn link_composite(&self, parent: &CatalogId, child: &CatalogId, path: &str)
        -> Result<bool>;

    /// Attaches a generic document to a part under the profile `kind` key
    async fn attach_document(
        &self,
        id: &CatalogId,
        kind: &str,
        document: &serde_json::Value,
    ) -> Result<bool>;

    async fn profile(&self, id: &CatalogId, kind: &str) -> Result<Vec<ProfileEntry>>;

    /// Executes caller-supplied query text and returns the raw response
    async fn raw_query(&self, query: &str) -> Result<serde_json::Value>;
}
