//! Space repository port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use domain::{Space, SpaceId, TenantId, UserId};

use crate::error::ApplicationError;

/// Port for space persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    /// Retrieve a space by ID
    async fn get(&self, id: &SpaceId) -> Result<Option<Space>, ApplicationError>;

    /// List spaces with pagination
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Space>, ApplicationError>;

    /// Save (create or update) a space
    async fn save(&self, space: &Space) -> Result<Space, ApplicationError>;

    /// Delete a space by ID, returning true if one was removed
    async fn delete(&self, id: &SpaceId) -> Result<bool, ApplicationError>;

    /// List spaces in a tenant with pagination
    async fn list_by_tenant(
        &self,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Space>, ApplicationError>;

    /// List spaces owned by a user, scoped to a tenant
    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Space>, ApplicationError>;

    /// List spaces where the user appears in the member list, scoped to a
    /// tenant (ownership does not imply listing here)
    async fn list_by_member(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Space>, ApplicationError>;
}
