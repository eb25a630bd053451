//! Query repository port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use domain::{ConversationId, Query, QueryId, SpaceId, TenantId, UserId};

use crate::error::ApplicationError;

/// Port for query persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// Retrieve a query by ID
    async fn get(&self, id: &QueryId) -> Result<Option<Query>, ApplicationError>;

    /// List queries with pagination
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Query>, ApplicationError>;

    /// Save (create or update) a query
    async fn save(&self, query: &Query) -> Result<Query, ApplicationError>;

    /// Delete a query by ID, returning true if one was removed
    async fn delete(&self, id: &QueryId) -> Result<bool, ApplicationError>;

    /// List queries in a space, scoped to a tenant
    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Query>, ApplicationError>;

    /// List queries submitted by a user, scoped to a tenant
    async fn list_by_user(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Query>, ApplicationError>;

    /// List queries in a conversation, scoped to a tenant
    async fn list_by_conversation(
        &self,
        conversation_id: &ConversationId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Query>, ApplicationError>;
}
