//! Tenant repository port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use domain::{Tenant, TenantId};

use crate::error::ApplicationError;

/// Port for tenant persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Retrieve a tenant by ID
    async fn get(&self, id: &TenantId) -> Result<Option<Tenant>, ApplicationError>;

    /// List tenants with pagination
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Tenant>, ApplicationError>;

    /// Save (create or update) a tenant
    async fn save(&self, tenant: &Tenant) -> Result<Tenant, ApplicationError>;

    /// Delete a tenant by ID, returning true if one was removed
    async fn delete(&self, id: &TenantId) -> Result<bool, ApplicationError>;

    /// Find a tenant by its URL-safe slug
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Tenant>, ApplicationError>;

    /// List active tenants with pagination
    async fn list_active(
        &self,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Tenant>, ApplicationError>;
}
