//! In-memory user store

use std::collections::HashMap;

use application::{error::ApplicationError, ports::UserRepository};
use async_trait::async_trait;
use domain::{TenantId, User, UserId};
use parking_lot::RwLock;
use tracing::debug;

/// In-memory implementation of [`UserRepository`]
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, ApplicationError> {
        Ok(self.users.read().get(id).cloned())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<User>, ApplicationError> {
        Ok(self
            .users
            .read()
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn save(&self, user: &User) -> Result<User, ApplicationError> {
        debug!(user_id = %user.id, tenant_id = %user.tenant_id, "saving user");
        self.users.write().insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, ApplicationError> {
        let removed = self.users.write().remove(id).is_some();
        debug!(user_id = %id, removed, "deleting user");
        Ok(removed)
    }

    async fn get_by_email(
        &self,
        email: &str,
        tenant_id: &TenantId,
    ) -> Result<Option<User>, ApplicationError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email.as_str() == email && u.tenant_id == *tenant_id)
            .cloned())
    }

    async fn get_by_auth_sub(
        &self,
        auth_sub: &str,
        auth_provider: &str,
    ) -> Result<Option<User>, ApplicationError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.auth_sub == auth_sub && u.auth_provider == auth_provider)
            .cloned())
    }

    async fn list_by_tenant(
        &self,
        tenant_id: &TenantId,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<User>, ApplicationError> {
        Ok(self
            .users
            .read()
            .values()
            .filter(|u| u.tenant_id == *tenant_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
