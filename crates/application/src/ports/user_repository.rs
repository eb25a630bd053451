//! User repository port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use domain::{TenantId, User, UserId};

use crate::error::ApplicationError;

/// Port for user persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Retrieve a user by ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, ApplicationError>;

    /// List users with pagination
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<User>, ApplicationError>;

    /// Save (create or update) a user
    async fn save(&self, user: &User) -> Result<User, ApplicationError>;

    /// Delete a user by ID, returning true if one was removed
    async fn delete(&self, id: &UserId) -> Result<bool, ApplicationError>;

    /// Find a user by email within a tenant
    async fn get_by_email(
        &self,
        email: &str,
        tenant_id: &TenantId,
    ) -> Result<Option<User>, ApplicationError>;

    /// Find a user by identity-provider subject claim
    async fn get_by_auth_sub(
        &self,
        auth_sub: &str,
        auth_provider: &str,
    ) -> Result<Option<User>, ApplicationError>;

    /// List users in a tenant with pagination
    async fn list_by_tenant(
        &self,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<User>, ApplicationError>;
}
