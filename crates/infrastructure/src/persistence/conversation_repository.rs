//! In-memory conversation store

use std::collections::HashMap;

use application::{error::ApplicationError, ports::ConversationRepository};
use async_trait::async_trait;
use domain::{Conversation, ConversationId, SpaceId, TenantId, UserId};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory implementation of [`ConversationRepository`]
#[derive(Debug, Default)]
pub struct InMemoryConversationRepository {
    conversations: RwLock<HashMap<ConversationId, Conversation>>,
}

impl InMemoryConversationRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn get(&self, id: &ConversationId) -> Result<Option<Conversation>, ApplicationError> {
        Ok(self.conversations.read().get(id).cloned())
    }

    async fn list(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Conversation>, ApplicationError> {
        Ok(self
            .conversations
            .read()
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn save(&self, conversation: &Conversation) -> Result<Conversation, ApplicationError> {
        debug!(conversation_id = %conversation.id, "saving conversation");
        self.conversations
            .write()
            .insert(conversation.id, conversation.clone());
        Ok(conversation.clone())
    }

    async fn delete(&self, id: &ConversationId) -> Result<bool, ApplicationError> {
        let removed = self.conversations.write().remove(id).is_some();
        debug!(conversation_id = %id, removed, "deleting conversation");
        Ok(removed)
    }

    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Conversation>, ApplicationError> {
        Ok(self
            .conversations
            .read()
            .values()
            .filter(|c| c.space_id == *space_id && c.tenant_id == *tenant_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Conversation>, ApplicationError> {
        Ok(self
            .conversations
            .read()
            .values()
            .filter(|c| c.user_id == *user_id && c.tenant_id == *tenant_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
