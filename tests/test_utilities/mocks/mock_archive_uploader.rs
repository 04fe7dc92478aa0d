use async_trait::async_trait;
use ccli::ports::outbound::UploadReceipt;
use ccli::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ArchiveUploader that returns a fixed receipt or fails
#[derive(Clone, Default)]
pub struct MockArchiveUploader {
    receipt: Option<UploadReceipt>,
    uploaded: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockArchiveUploader {
    /// An uploader whose server accepted the archive as `part_id`
    pub fn accepting(name: &str, sha256: &str, part_id: Option<&str>) -> Self {
        Self {
            receipt: Some(UploadReceipt {
                name: name.to_string(),
                insert_date: "2024-03-01T10:00:00Z".to_string(),
                sha256: sha256.to_string(),
                sha1: "da39a3ee5e6b4b0d3255bfef95601890afd80709".to_string(),
                part_id: part_id.map(str::to_string),
            }),
            uploaded: Arc::default(),
        }
    }

    /// An uploader whose transport always fails
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn uploaded(&self) -> Vec<PathBuf> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArchiveUploader for MockArchiveUploader {
    async fn upload(&self, path: &Path) -> Result<UploadReceipt> {
        self.uploaded.lock().unwrap().push(path.to_path_buf());
        self.receipt
            .clone()
            .ok_or_else(|| anyhow::anyhow!("connection refused"))
    }
}
