//! In-memory ports used by unit tests; the catalog fake records every call.

use crate::catalog::domain::CatalogId;
use crate::ports::outbound::{
    CatalogClient, CreatePartInput, DeleteOptions, ProfileEntry, RemotePart, SetPartInput,
    UpdatePartInput,
};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct FakeCatalogClient {
    by_sha256: HashMap<String, String>,
    by_fvc: HashMap<String, String>,
    created_id: String,
    fail_operation: Option<(String, usize)>,
    accept_attach: bool,
    calls: Arc<Mutex<Vec<String>>>,
    attached: Arc<Mutex<Vec<(CatalogId, String, serde_json::Value)>>>,
    updates: Arc<Mutex<Vec<UpdatePartInput>>>,
    sets: Arc<Mutex<Vec<SetPartInput>>>,
    creates: Arc<Mutex<Vec<CreatePartInput>>>,
}

impl FakeCatalogClient {
    pub(crate) fn new() -> Self {
        Self {
            by_sha256: HashMap::new(),
            by_fvc: HashMap::new(),
            created_id: "new-part".to_string(),
            fail_operation: None,
            accept_attach: true,
            calls: Arc::new(Mutex::new(Vec::new())),
            attached: Arc::new(Mutex::new(Vec::new())),
            updates: Arc::new(Mutex::new(Vec::new())),
            sets: Arc::new(Mutex::new(Vec::new())),
            creates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn with_sha256(mut self, sha256: &str, id: &str) -> Self {
        self.by_sha256.insert(sha256.to_string(), id.to_string());
        self
    }

    pub(crate) fn with_fvc(mut self, fvc: &str, id: &str) -> Self {
        self.by_fvc.insert(fvc.to_string(), id.to_string());
        self
    }

    pub(crate) fn creating(mut self, id: &str) -> Self {
        self.created_id = id.to_string();
        self
    }

    /// Fails the `nth` (0-based) call of `operation`
    pub(crate) fn failing(mut self, operation: &str, nth: usize) -> Self {
        self.fail_operation = Some((operation.to_string(), nth));
        self
    }

    pub(crate) fn declining_attach(mut self) -> Self {
        self.accept_attach = false;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn attached(&self) -> Vec<(CatalogId, String, serde_json::Value)> {
        self.attached.lock().unwrap().clone()
    }

    pub(crate) fn updates(&self) -> Vec<UpdatePartInput> {
        self.updates.lock().unwrap().clone()
    }

    pub(crate) fn sets(&self) -> Vec<SetPartInput> {
        self.sets.lock().unwrap().clone()
    }

    pub(crate) fn creates(&self) -> Vec<CreatePartInput> {
        self.creates.lock().unwrap().clone()
    }

    fn record(&self, operation: &str, call: String) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        let seen = calls
            .iter()
            .filter(|c| c.split(' ').next() == Some(operation))
            .count();
        calls.push(call);
        match &self.fail_operation {
            Some((failing, nth)) if failing == operation && *nth == seen => {
                anyhow::bail!("simulated {} failure", operation)
            }
            _ => Ok(()),
        }
    }

    fn part(id: &str) -> RemotePart {
        RemotePart {
            id: id.to_string(),
            ..RemotePart::default()
        }
    }
}

#[async_trait]
impl CatalogClient for FakeCatalogClient {
    async fn part_id_by_sha256(&self, sha256: &str) -> Result<Option<CatalogId>> {
        self.record("part_id_by_sha256", format!("part_id_by_sha256 {}", sha256))?;
        Ok(self.by_sha256.get(sha256).map(CatalogId::new))
    }

    async fn part_id_by_fvc(&self, fvc: &str) -> Result<Option<CatalogId>> {
        self.record("part_id_by_fvc", format!("part_id_by_fvc {}", fvc))?;
        Ok(self.by_fvc.get(fvc).map(CatalogId::new))
    }

    async fn part_by_id(&self, id: &CatalogId) -> Result<Option<RemotePart>> {
        self.record("part_by_id", format!("part_by_id {}", id))?;
        Ok(Some(Self::part(id.as_str())))
    }

    async fn part_by_sha256(&self, sha256: &str) -> Result<Option<RemotePart>> {
        self.record("part_by_sha256", format!("part_by_sha256 {}", sha256))?;
        Ok(self.by_sha256.get(sha256).map(|id| Self::part(id)))
    }

    async fn part_by_fvc(&self, fvc: &str) -> Result<Option<RemotePart>> {
        self.record("part_by_fvc", format!("part_by_fvc {}", fvc))?;
        Ok(self.by_fvc.get(fvc).map(|id| Self::part(id)))
    }

    async fn search_parts(&self, query: &str) -> Result<Vec<RemotePart>> {
        self.record("search_parts", format!("search_parts {}", query))?;
        Ok(Vec::new())
    }

    async fn create_part(&self, input: &CreatePartInput) -> Result<RemotePart> {
        self.record("create_part", "create_part".to_string())?;
        self.creates.lock().unwrap().push(input.clone());
        Ok(RemotePart {
            name: input.name.clone(),
            version: input.version.clone(),
            ..Self::part(&self.created_id)
        })
    }

    async fn update_part(&self, input: &UpdatePartInput) -> Result<RemotePart> {
        self.record("update_part", format!("update_part {}", input.id))?;
        self.updates.lock().unwrap().push(input.clone());
        Ok(Self::part(input.id.as_str()))
    }

    async fn set_part(&self, input: &SetPartInput) -> Result<RemotePart> {
        self.record("set_part", format!("set_part {}", input.id))?;
        self.sets.lock().unwrap().push(input.clone());
        Ok(Self::part(input.id.as_str()))
    }

    async fn delete_part(&self, id: &CatalogId, options: DeleteOptions) -> Result<bool> {
        self.record(
            "delete_part",
            format!(
                "delete_part {} recursive={} force={}",
                id, options.recursive, options.force
            ),
        )?;
        Ok(true)
    }

    async fn create_alias(&self, id: &CatalogId, alias: &str) -> Result<()> {
        self.record("create_alias", format!("create_alias {} {}", id, alias))
    }

    async fn link_composite(&self, parent: &CatalogId, child: &CatalogId, path: &str) -> Result<bool> {
        self.record(
            "link_composite",
            format!("link_composite {} {} {}", parent, child, path),
        )?;
        Ok(true)
    }

    async fn attach_document(
        &self,
        id: &CatalogId,
        kind: &str,
        document: &serde_json::Value,
    ) -> Result<bool> {
        self.record("attach_document", format!("attach_document {} {}", id, kind))?;
        self.attached
            .lock()
            .unwrap()
            .push((id.clone(), kind.to_string(), document.clone()));
        Ok(self.accept_attach)
    }

    async fn profile(&self, id: &CatalogId, kind: &str) -> Result<Vec<ProfileEntry>> {
        self.record("profile", format!("profile {} {}", id, kind))?;
        Ok(Vec::new())
    }

    async fn raw_query(&self, query: &str) -> Result<serde_json::Value> {
        self.record("raw_query", format!("raw_query {}", query))?;
        Ok(serde_json::json!({"data": null}))
    }
}

/// Serves the same record text for any path
pub(crate) struct InlineRecordReader(pub(crate) String);

impl crate::ports::outbound::RecordReader for InlineRecordReader {
    fn read_record(&self, _path: &std::path::Path) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[derive(Clone, Default)]
pub(crate) struct CapturingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CapturingReporter {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl crate::ports::outbound::ProgressReporter for CapturingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
