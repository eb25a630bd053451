//! Tenant entity - The multi-tenancy boundary
//!
//! A tenant is an organization or department. Every other entity carries
//! the tenant's id, and quota enforcement starts here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{TenantId, UserId};

/// Tenant lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    Active,
    Suspended,
    Archived,
}

/// Resource limits per tenant
///
/// Quotas are inclusive at the maximum: reaching the limit counts as
/// exceeding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantQuotas {
    pub max_users: u64,
    pub max_spaces: u64,
    pub max_documents_per_space: u64,
    pub max_storage_gb: u64,
    pub max_queries_per_month: u64,
}

impl Default for TenantQuotas {
    fn default() -> Self {
        Self {
            max_users: 100,
            max_spaces: 50,
            max_documents_per_space: 10_000,
            max_storage_gb: 100,
            max_queries_per_month: 10_000,
        }
    }
}

/// Tenant entity (aggregate root for multi-tenancy)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique tenant identifier
    pub id: TenantId,
    /// Organization name
    pub name: String,
    /// URL-safe identifier, unique across tenants
    pub slug: String,
    /// Lifecycle status
    pub status: TenantStatus,
    /// Resource limits
    pub quotas: TenantQuotas,
    /// When the tenant was created
    pub created_at: DateTime<Utc>,
    /// When the tenant was last updated
    pub updated_at: DateTime<Utc>,
    /// Admin user who created the tenant
    pub created_by: UserId,
}

impl Tenant {
    /// Create a new active tenant with default quotas
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the name is empty or longer
    /// than 200 characters, or if the slug is empty or contains anything
    /// other than lowercase ASCII letters, digits, and hyphens.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        created_by: UserId,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() || name.chars().count() > 200 {
            return Err(DomainError::validation("name must be 1-200 characters"));
        }

        let slug = slug.into();
        if !slug_is_valid(&slug) {
            return Err(DomainError::validation(
                "slug must match ^[a-z0-9-]+$",
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: TenantId::new(),
            name,
            slug,
            status: TenantStatus::Active,
            quotas: TenantQuotas::default(),
            created_at: now,
            updated_at: now,
            created_by,
        })
    }

    /// Override the default quotas
    #[must_use]
    pub fn with_quotas(mut self, quotas: TenantQuotas) -> Self {
        self.quotas = quotas;
        self
    }

    /// Check whether a named resource quota is exceeded
    ///
    /// Resolves `max_<resource>` by name; an unknown resource has no limit
    /// and never reports exceeded. The boundary is inclusive: a count equal
    /// to the maximum counts as exceeded.
    pub fn is_quota_exceeded(&self, resource: &str, current_count: u64) -> bool {
        let max_allowed = match resource {
            "users" => Some(self.quotas.max_users),
            "spaces" => Some(self.quotas.max_spaces),
            "documents_per_space" => Some(self.quotas.max_documents_per_space),
            "storage_gb" => Some(self.quotas.max_storage_gb),
            "queries_per_month" => Some(self.quotas.max_queries_per_month),
            _ => None,
        };

        max_allowed.is_some_and(|max| current_count >= max)
    }

    /// Suspend the tenant
    pub fn suspend(&mut self) {
        self.status = TenantStatus::Suspended;
        self.updated_at = Utc::now();
    }

    /// Archive the tenant
    pub fn archive(&mut self) {
        self.status = TenantStatus::Archived;
        self.updated_at = Utc::now();
    }
}

/// Non-empty, lowercase alphanumeric plus hyphen
fn slug_is_valid(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
