//! In-memory tenant store

use std::collections::HashMap;

use application::{error::ApplicationError, ports::TenantRepository};
use async_trait::async_trait;
use domain::{Tenant, TenantId, TenantStatus};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory implementation of [`TenantRepository`]
#[derive(Debug, Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<HashMap<TenantId, Tenant>>,
}

impl InMemoryTenantRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn get(&self, id: &TenantId) -> Result<Option<Tenant>, ApplicationError> {
        Ok(self.tenants.read().get(id).cloned())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Tenant>, ApplicationError> {
        Ok(self
            .tenants
            .read()
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn save(&self, tenant: &Tenant) -> Result<Tenant, ApplicationError> {
        debug!(tenant_id = %tenant.id, slug = %tenant.slug, "saving tenant");
        self.tenants.write().insert(tenant.id, tenant.clone());
        Ok(tenant.clone())
    }

    async fn delete(&self, id: &TenantId) -> Result<bool, ApplicationError> {
        let removed = self.tenants.write().remove(id).is_some();
        debug!(tenant_id = %id, removed, "deleting tenant");
        Ok(removed)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Tenant>, ApplicationError> {
        Ok(self
            .tenants
            .read()
            .values()
            .find(|t| t.slug == slug)
            .cloned())
    }

    async fn list_active(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Tenant>, ApplicationError> {
        Ok(self
            .tenants
            .read()
            .values()
            .filter(|t| t.status == TenantStatus::Active)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
