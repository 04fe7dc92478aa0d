use async_trait::async_trait;
use ccli::ports::outbound::{
    CreatePartInput, DeleteOptions, ProfileEntry, RemotePart, SetPartInput, UpdatePartInput,
};
use ccli::prelude::*;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock CatalogClient that serves scripted parts and records every call
///
/// Calls are recorded as `(operation, payload)` where `payload` is the JSON
/// of the arguments, so tests can assert on exactly what was sent.
#[derive(Clone, Default)]
pub struct MockCatalogClient {
    parts: HashMap<String, RemotePart>,
    archives: HashMap<String, String>,
    search_results: HashMap<String, Vec<RemotePart>>,
    profiles: HashMap<(String, String), Vec<ProfileEntry>>,
    failing: HashSet<String>,
    next_id: String,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self {
            next_id: "sdl3ga-naTs42g5-rbow2A".to_string(),
            ..Self::default()
        }
    }

    /// Adds a stored part, reachable by id and by its verification code
    pub fn with_part(mut self, part: RemotePart) -> Self {
        self.parts.insert(part.id.clone(), part);
        self
    }

    /// Maps an archive hash to a part id
    pub fn with_archive(mut self, sha256: &str, part_id: &str) -> Self {
        self.archives.insert(sha256.to_string(), part_id.to_string());
        self
    }

    pub fn with_search_result(mut self, query: &str, parts: Vec<RemotePart>) -> Self {
        self.search_results.insert(query.to_string(), parts);
        self
    }

    pub fn with_profile(mut self, id: &str, kind: &str, documents: Vec<ProfileEntry>) -> Self {
        self.profiles
            .insert((id.to_string(), kind.to_string()), documents);
        self
    }

    /// Id returned by the create mutation
    pub fn creating(mut self, id: &str) -> Self {
        self.next_id = id.to_string();
        self
    }

    /// Every call of `operation` fails at the transport level
    pub fn failing_on(mut self, operation: &str) -> Self {
        self.failing.insert(operation.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<String> {
        self.calls().into_iter().map(|(op, _)| op).collect()
    }

    /// Payloads of every call of `operation`, in order
    pub fn payloads(&self, operation: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(op, _)| op == operation)
            .map(|(_, payload)| payload)
            .collect()
    }

    fn record(&self, operation: &str, payload: Value) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), payload));
        if self.failing.contains(operation) {
            anyhow::bail!("{}: connection reset by peer", operation);
        }
        Ok(())
    }

    fn part_by_code(&self, fvc: &str) -> Option<RemotePart> {
        self.parts
            .values()
            .find(|part| part.file_verification_code == fvc)
            .cloned()
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn part_id_by_sha256(&self, sha256: &str) -> Result<Option<CatalogId>> {
        self.record("archive", json!({ "sha256": sha256 }))?;
        Ok(self.archives.get(sha256).map(CatalogId::new))
    }

    async fn part_id_by_fvc(&self, fvc: &str) -> Result<Option<CatalogId>> {
        self.record("part", json!({ "file_verification_code": fvc }))?;
        Ok(self.part_by_code(fvc).map(|part| part.catalog_id()))
    }

    async fn part_by_id(&self, id: &CatalogId) -> Result<Option<RemotePart>> {
        self.record("part", json!({ "id": id }))?;
        Ok(self.parts.get(id.as_str()).cloned())
    }

    async fn part_by_sha256(&self, sha256: &str) -> Result<Option<RemotePart>> {
        self.record("part", json!({ "sha256": sha256 }))?;
        Ok(self
            .archives
            .get(sha256)
            .and_then(|id| self.parts.get(id))
            .cloned())
    }

    async fn part_by_fvc(&self, fvc: &str) -> Result<Option<RemotePart>> {
        self.record("part", json!({ "file_verification_code": fvc }))?;
        Ok(self.part_by_code(fvc))
    }

    async fn search_parts(&self, query: &str) -> Result<Vec<RemotePart>> {
        self.record("find_archive", json!({ "query": query, "method": "fast" }))?;
        Ok(self.search_results.get(query).cloned().unwrap_or_default())
    }

    async fn create_part(&self, input: &CreatePartInput) -> Result<RemotePart> {
        self.record("createPart", serde_json::to_value(input)?)?;
        Ok(RemotePart {
            id: self.next_id.clone(),
            part_type: input.part_type.clone(),
            name: input.name.clone(),
            version: input.version.clone(),
            label: input.label.clone(),
            family_name: input.family_name.clone(),
            license: input.license.clone(),
            description: input.description.clone(),
            ..RemotePart::default()
        })
    }

    async fn update_part(&self, input: &UpdatePartInput) -> Result<RemotePart> {
        self.record("updatePart", serde_json::to_value(input)?)?;
        let mut part = self
            .parts
            .get(input.id.as_str())
            .cloned()
            .unwrap_or_default();
        part.id = input.id.to_string();
        if let Some(description) = &input.description {
            part.description = description.clone();
        }
        Ok(part)
    }

    async fn set_part(&self, input: &SetPartInput) -> Result<RemotePart> {
        self.record("setPart", serde_json::to_value(input)?)?;
        Ok(RemotePart {
            id: input.id.to_string(),
            name: input.name.clone(),
            version: input.version.clone(),
            description: input.description.clone(),
            ..RemotePart::default()
        })
    }

    async fn delete_part(&self, id: &CatalogId, options: DeleteOptions) -> Result<bool> {
        self.record(
            "deletePart",
            json!({ "part_id": id, "recursive": options.recursive, "force": options.force }),
        )?;
        Ok(self.parts.contains_key(id.as_str()))
    }

    async fn create_alias(&self, id: &CatalogId, alias: &str) -> Result<()> {
        self.record("createAlias", json!({ "id": id, "alias": alias }))
    }

    async fn link_composite(
        &self,
        parent: &CatalogId,
        child: &CatalogId,
        path: &str,
    ) -> Result<bool> {
        self.record(
            "partHasPart",
            json!({ "parent": parent, "child": child, "path": path }),
        )?;
        Ok(true)
    }

    async fn attach_document(&self, id: &CatalogId, kind: &str, document: &Value) -> Result<bool> {
        self.record(
            "attachDocument",
            json!({ "id": id, "key": kind, "document": document }),
        )?;
        Ok(true)
    }

    async fn profile(&self, id: &CatalogId, kind: &str) -> Result<Vec<ProfileEntry>> {
        self.record("profile", json!({ "id": id, "key": kind }))?;
        Ok(self
            .profiles
            .get(&(id.to_string(), kind.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn raw_query(&self, query: &str) -> Result<Value> {
        self.record("query", json!({ "query": query }))?;
        Ok(json!({ "part": { "file_verification_code": "FVC2-ABC" } }))
    }
}
