use super::http_client;
use crate::catalog::domain::CatalogId;
use crate::ports::outbound::{
    CatalogClient, CreatePartInput, DeleteOptions, ProfileEntry, RemoteArchive, RemotePart,
    SetPartInput, UpdatePartInput,
};
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Selection set requested for every part
const PART_FIELDS: &str = "id type content_type version name label family_name \
    file_verification_code size license license_rationale description home_page \
    comprised aliases";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    variables: Value,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchHit {
    archive: Option<ArchiveHit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArchiveHit {
    part: Option<RemotePart>,
}

/// Extracts `data` from a response envelope, failing on any reported error
pub(super) fn decode_envelope(response: GraphQlResponse) -> Result<Value> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        anyhow::bail!("Server returned errors: {}", messages.join("; "));
    }
    Ok(response.data.unwrap_or(Value::Null))
}

/// Decodes one top-level field of `data`; a missing field decodes from `null`
pub(super) fn take_field<T: DeserializeOwned>(mut data: Value, field: &str) -> Result<T> {
    let value = data
        .get_mut(field)
        .map(Value::take)
        .unwrap_or(Value::Null);
    serde_json::from_value(value)
        .map_err(|e| anyhow::anyhow!("Unexpected shape of \"{}\" in response: {}", field, e))
}

/// GraphQlCatalogClient adapter for the catalog's GraphQL endpoint
///
/// Implements the CatalogClient port by POSTing `{query, variables}` to the
/// configured server address. Every method is a single request; nothing is
/// retried or cached.
pub struct GraphQlCatalogClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQlCatalogClient {
    /// Creates a client for the GraphQL endpoint at `endpoint`
    ///
    /// `insecure_tls` accepts self-signed server certificates.
    pub fn new(endpoint: impl Into<String>, insecure_tls: bool) -> Result<Self> {
        Ok(Self {
            client: http_client(insecure_tls)?,
            endpoint: endpoint.into(),
        })
    }

    /// Sends a request and returns the decoded response envelope
    async fn post(&self, query: &str, variables: Value) -> Result<GraphQlResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Server responded with status {}", status);
        }

        Ok(response.json().await?)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T> {
        let data = decode_envelope(self.post(query, variables).await?)?;
        take_field(data, field)
    }

    async fn part_where(&self, argument: &str, kind: &str, value: &str) -> Result<Option<RemotePart>> {
        let query = format!(
            "query($value: {kind}!) {{ part({argument}: $value) {{ {PART_FIELDS} }} }}"
        );
        self.execute(&query, json!({ "value": value }), "part").await
    }
}

#[async_trait]
impl CatalogClient for GraphQlCatalogClient {
    async fn part_id_by_sha256(&self, sha256: &str) -> Result<Option<CatalogId>> {
        let archive: Option<RemoteArchive> = self
            .execute(
                "query($sha256: String!) { archive(sha256: $sha256) { sha256 name part_id } }",
                json!({ "sha256": sha256 }),
                "archive",
            )
            .await?;
        Ok(archive.and_then(|a| a.part_id).map(CatalogId::new))
    }

    async fn part_id_by_fvc(&self, fvc: &str) -> Result<Option<CatalogId>> {
        let part: Option<RemotePart> = self
            .execute(
                "query($fvc: String!) { part(file_verification_code: $fvc) { id } }",
                json!({ "fvc": fvc }),
                "part",
            )
            .await?;
        Ok(part.map(|p| p.catalog_id()))
    }

    async fn part_by_id(&self, id: &CatalogId) -> Result<Option<RemotePart>> {
        self.part_where("id", "UUID", id.as_str()).await
    }

    async fn part_by_sha256(&self, sha256: &str) -> Result<Option<RemotePart>> {
        self.part_where("sha256", "String", sha256).await
    }

    async fn part_by_fvc(&self, fvc: &str) -> Result<Option<RemotePart>> {
        self.part_where("file_verification_code", "String", fvc)
            .await
    }

    async fn search_parts(&self, query: &str) -> Result<Vec<RemotePart>> {
        let text = format!(
            "query($query: String!, $method: String) {{ \
             find_archive(query: $query, method: $method) {{ archive {{ part {{ {PART_FIELDS} }} }} }} }}"
        );
        let hits: Option<Vec<SearchHit>> = self
            .execute(
                &text,
                json!({ "query": query, "method": "fast" }),
                "find_archive",
            )
            .await?;
        Ok(hits
            .unwrap_or_default()
            .into_iter()
            .filter_map(|hit| hit.archive.and_then(|archive| archive.part))
            .collect())
    }

    async fn create_part(&self, input: &CreatePartInput) -> Result<RemotePart> {
        let query = format!(
            "mutation($partInput: NewPartInput!) {{ createPart(partInput: $partInput) {{ {PART_FIELDS} }} }}"
        );
        self.execute(&query, json!({ "partInput": input }), "createPart")
            .await
    }

    async fn update_part(&self, input: &UpdatePartInput) -> Result<RemotePart> {
        let query = format!(
            "mutation($partInput: PartInput!) {{ updatePart(partInput: $partInput) {{ {PART_FIELDS} }} }}"
        );
        self.execute(&query, json!({ "partInput": input }), "updatePart")
            .await
    }

    async fn set_part(&self, input: &SetPartInput) -> Result<RemotePart> {
        let query = format!(
            "mutation($partInput: PartInput!) {{ setPart(partInput: $partInput) {{ {PART_FIELDS} }} }}"
        );
        self.execute(&query, json!({ "partInput": input }), "setPart")
            .await
    }

    async fn delete_part(&self, id: &CatalogId, options: DeleteOptions) -> Result<bool> {
        let deleted: Option<bool> = self
            .execute(
                "mutation($id: UUID!, $recursive: Boolean, $force: Boolean) { \
                 deletePart(part_id: $id, recursive: $recursive, force: $force) }",
                json!({
                    "id": id,
                    "recursive": options.recursive,
                    "force": options.force,
                }),
                "deletePart",
            )
            .await?;
        Ok(deleted.unwrap_or(false))
    }

    async fn create_alias(&self, id: &CatalogId, alias: &str) -> Result<()> {
        let _: Value = self
            .execute(
                "mutation($id: UUID!, $alias: String!) { createAlias(id: $id, alias: $alias) }",
                json!({ "id": id, "alias": alias }),
                "createAlias",
            )
            .await?;
        Ok(())
    }

    async fn link_composite(
        &self,
        parent: &CatalogId,
        child: &CatalogId,
        path: &str,
    ) -> Result<bool> {
        let linked: Option<bool> = self
            .execute(
                "mutation($parent: UUID!, $child: UUID!, $path: String!) { \
                 partHasPart(parent: $parent, child: $child, path: $path) }",
                json!({ "parent": parent, "child": child, "path": path }),
                "partHasPart",
            )
            .await?;
        Ok(linked.unwrap_or(false))
    }

    async fn attach_document(
        &self,
        id: &CatalogId,
        kind: &str,
        document: &Value,
    ) -> Result<bool> {
        let attached: Option<bool> = self
            .execute(
                "mutation($id: UUID!, $key: String!, $document: JSON!) { \
                 attachDocument(id: $id, key: $key, document: $document) }",
                json!({ "id": id, "key": kind, "document": document }),
                "attachDocument",
            )
            .await?;
        Ok(attached.unwrap_or(false))
    }

    async fn profile(&self, id: &CatalogId, kind: &str) -> Result<Vec<ProfileEntry>> {
        let documents: Option<Vec<ProfileEntry>> = self
            .execute(
                "query($id: UUID!, $key: String!) { profile(id: $id, key: $key) { title document } }",
                json!({ "id": id, "key": kind }),
                "profile",
            )
            .await?;
        Ok(documents.unwrap_or_default())
    }

    async fn raw_query(&self, query: &str) -> Result<Value> {
        decode_envelope(self.post(query, Value::Null).await?)
    }
}
