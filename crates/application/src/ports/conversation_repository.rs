//! Conversation repository port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use domain::{Conversation, ConversationId, SpaceId, TenantId, UserId};

use crate::error::ApplicationError;

/// Port for conversation persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Retrieve a conversation by ID
    async fn get(&self, id: &ConversationId) -> Result<Option<Conversation>, ApplicationError>;

    /// List conversations with pagination
    async fn list(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Conversation>, ApplicationError>;

    /// Save (create or update) a conversation
    async fn save(&self, conversation: &Conversation) -> Result<Conversation, ApplicationError>;

    /// Delete a conversation by ID, returning true if one was removed
    async fn delete(&self, id: &ConversationId) -> Result<bool, ApplicationError>;

    /// List conversations in a space, scoped to a tenant
    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Conversation>, ApplicationError>;

    /// List conversations owned by a user, scoped to a tenant
    async fn list_by_user(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Conversation>, ApplicationError>;
}
