//! In-memory query store

use std::collections::HashMap;

use application::{error::ApplicationError, ports::QueryRepository};
use async_trait::async_trait;
use domain::{ConversationId, Query, QueryId, SpaceId, TenantId, UserId};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory implementation of [`QueryRepository`]
#[derive(Debug, Default)]
pub struct InMemoryQueryRepository {
    queries: RwLock<HashMap<QueryId, Query>>,
}

impl InMemoryQueryRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueryRepository for InMemoryQueryRepository {
    async fn get(&self, id: &QueryId) -> Result<Option<Query>, ApplicationError> {
        Ok(self.queries.read().get(id).cloned())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Query>, ApplicationError> {
        Ok(self
            .queries
            .read()
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn save(&self, query: &Query) -> Result<Query, ApplicationError> {
        debug!(query_id = %query.id, space_id = %query.space_id, "saving query");
        self.queries.write().insert(query.id, query.clone());
        Ok(query.clone())
    }

    async fn delete(&self, id: &QueryId) -> Result<bool, ApplicationError> {
        let removed = self.queries.write().remove(id).is_some();
        debug!(query_id = %id, removed, "deleting query");
        Ok(removed)
    }

    async fn list_by_space(
        &self,
        space_id: &SpaceId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Query>, ApplicationError> {
        Ok(self
            .queries
            .read()
            .values()
            .filter(|q| q.space_id == *space_id && q.tenant_id == *tenant_id)
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
    ) -> Result<Vec<Query>, ApplicationError> {
        Ok(self
            .queries
            .read()
            .values()
            .filter(|q| q.user_id == *user_id && q.tenant_id == *tenant_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_by_conversation(
        &self,
        conversation_id: &ConversationId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Query>, ApplicationError> {
        Ok(self
            .queries
            .read()
            .values()
            .filter(|q| {
                q.conversation_id == Some(*conversation_id) && q.tenant_id == *tenant_id
            })
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
