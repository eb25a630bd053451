//! In-memory document store

use std::collections::HashMap;

use application::{error::ApplicationError, ports::DocumentRepository};
use async_trait::async_trait;
use domain::{Document, DocumentId, DocumentStatus, SpaceId, TenantId};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory implementation of [`DocumentRepository`]
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl InMemoryDocumentRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn get(&self, id: &DocumentId) -> Result<Option<Document>, ApplicationError> {
        Ok(self.documents.read().get(id).cloned())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Document>, ApplicationError> {
        Ok(self
            .documents
            .read()
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn save(&self, document: &Document) -> Result<Document, ApplicationError> {
        debug!(document_id = %document.id, space_id = %document.space_id, "saving document");
        self.documents.write().insert(document.id, document.clone());
        Ok(document.clone())
    }

    async fn delete(&self, id: &DocumentId) -> Result<bool, ApplicationError> {
        let removed = self.documents.write().remove(id).is_some();
        debug!(document_id = %id, removed, "deleting document");
        Ok(removed)
    }

    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Document>, ApplicationError> {
        Ok(self
            .documents
            .read()
            .values()
            .filter(|d| d.space_id == *space_id && d.tenant_id == *tenant_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_by_content_hash(
        &self,
        content_hash: &str,
        tenant_id: &TenantId,
    ) -> Result<Option<Document>, ApplicationError> {
        Ok(self
            .documents
            .read()
            .values()
            .find(|d| d.content_hash == content_hash && d.tenant_id == *tenant_id)
            .cloned())
    }

    async fn list_pending_indexing(
        &self,
        tenant_id: &TenantId,
        limit: usize,
    ) -> Result<Vec<Document>, ApplicationError> {
        Ok(self
            .documents
            .read()
            .values()
            .filter(|d| d.tenant_id == *tenant_id && d.status == DocumentStatus::Pending)
            .take(limit)
            .cloned()
            .collect())
    }
}
