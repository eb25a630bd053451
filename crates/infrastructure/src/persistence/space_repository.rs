//! In-memory space store

use std::collections::HashMap;

use application::{error::ApplicationError, ports::SpaceRepository};
use async_trait::async_trait;
use domain::{Space, SpaceId, TenantId, UserId};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory implementation of [`SpaceRepository`]
#[derive(Debug, Default)]
pub struct InMemorySpaceRepository {
    spaces: RwLock<HashMap<SpaceId, Space>>,
}

impl InMemorySpaceRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpaceRepository for InMemorySpaceRepository {
    async fn get(&self, id: &SpaceId) -> Result<Option<Space>, ApplicationError> {
        Ok(self.spaces.read().get(id).cloned())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Space>, ApplicationError> {
        Ok(self
            .spaces
            .read()
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn save(&self, space: &Space) -> Result<Space, ApplicationError> {
        debug!(space_id = %space.id, tenant_id = %space.tenant_id, "saving space");
        self.spaces.write().insert(space.id, space.clone());
        Ok(space.clone())
    }

    async fn delete(&self, id: &SpaceId) -> Result<bool, ApplicationError> {
        let removed = self.spaces.write().remove(id).is_some();
        debug!(space_id = %id, removed, "deleting space");
        Ok(removed)
    }

    async fn list_by_tenant(
        &self,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Space>, ApplicationError> {
        Ok(self
            .spaces
            .read()
            .values()
            .filter(|s| s.tenant_id == *tenant_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Space>, ApplicationError> {
        Ok(self
            .spaces
            .read()
            .values()
            .filter(|s| s.owner_id == *owner_id && s.tenant_id == *tenant_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_by_member(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Space>, ApplicationError> {
        Ok(self
            .spaces
            .read()
            .values()
            .filter(|s| {
                s.tenant_id == *tenant_id && s.members.iter().any(|m| m.user_id == *user_id)
            })
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
