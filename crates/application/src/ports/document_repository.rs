//! Document repository port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use domain::{Document, DocumentId, SpaceId, TenantId};

use crate::error::ApplicationError;

/// Port for document persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Retrieve a document by ID
    async fn get(&self, id: &DocumentId) -> Result<Option<Document>, ApplicationError>;

    /// List documents with pagination
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Document>, ApplicationError>;

    /// Save (create or update) a document
    async fn save(&self, document: &Document) -> Result<Document, ApplicationError>;

    /// Delete a document by ID, returning true if one was removed
    async fn delete(&self, id: &DocumentId) -> Result<bool, ApplicationError>;

    /// List documents in a space, scoped to a tenant
    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Document>, ApplicationError>;

    /// Find a document by content hash within a tenant (deduplication)
    async fn get_by_content_hash(
        &self,
        content_hash: &str,
        tenant_id: &TenantId,
    ) -> Result<Option<Document>, ApplicationError>;

    /// List documents awaiting indexing in a tenant
    async fn list_pending_indexing(
        &self,
        tenant_id: &TenantId,
        limit: usize,
    ) -> Result<Vec<Document>, ApplicationError>;
}
