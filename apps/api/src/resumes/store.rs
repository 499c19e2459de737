//! In-memory registry of decoded resumes, addressed by handle.
//!
//! Every operation names the resume it works on; there is no implicit
//! "current document". Records live for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::extraction::{DocumentKind, ExtractedDocument};

#[derive(Debug, Clone)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub file_name: Option<String>,
    pub document: ExtractedDocument,
    pub uploaded_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub fn new(file_name: Option<String>, document: ExtractedDocument) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name,
            document,
            uploaded_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> ResumeSummary {
        ResumeSummary {
            resume_id: self.id,
            file_name: self.file_name.clone(),
            kind: self.document.kind,
            page_count: self.document.page_count(),
            uploaded_at: self.uploaded_at,
        }
    }
}

/// Public view of a stored resume.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSummary {
    pub resume_id: Uuid,
    pub file_name: Option<String>,
    pub kind: DocumentKind,
    pub page_count: usize,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ResumeStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<ResumeRecord>>>>,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: ResumeRecord) -> Arc<ResumeRecord> {
        let record = Arc::new(record);
        self.inner
            .write()
            .await
            .insert(record.id, Arc::clone(&record));
        record
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<ResumeRecord>> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
