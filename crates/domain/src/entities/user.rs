//! User entity - A person acting within exactly one tenant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{Email, TenantId, UserId, mask_email};

/// User roles with increasing permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Read-only access
    Viewer,
    /// Can create queries and add documents
    Analyst,
    /// Full control over users and spaces in the tenant
    Admin,
    /// Internal system operations
    System,
}

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Suspended,
    /// Soft-deleted; retained for the audit trail
    Deleted,
}

/// User preferences (UI settings, notifications)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub locale: String,
    pub timezone: String,
    pub email_notifications: bool,
    pub theme: String,
    pub results_per_page: u32,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            locale: "en-CA".to_string(),
            timezone: "America/Toronto".to_string(),
            email_notifications: true,
            theme: "auto".to_string(),
            results_per_page: 20,
        }
    }
}

/// User entity (aggregate root)
///
/// Tenant membership is fixed at construction and is the context for every
/// authorization check involving this user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Tenant the user belongs to (immutable)
    pub tenant_id: TenantId,
    /// Validated email address
    pub email: Email,
    /// Full name
    pub name: String,
    /// Role within the tenant
    pub role: UserRole,
    /// Account status
    pub status: UserStatus,
    /// External identity provider name
    pub auth_provider: String,
    /// Subject claim from the identity provider (unique per provider)
    pub auth_sub: String,
    /// UI and notification preferences
    pub preferences: UserPreferences,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
    /// Last login timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    /// User who created this account
    pub created_by: UserId,
}

/// PII-safe projection of a user for logging and telemetry
///
/// The email and name here are masked strings, not validated value
/// objects; a masked address is intentionally not a valid [`Email`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskedUser {
    pub id: UserId,
    pub tenant_id: TenantId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl User {
    /// Create a new active viewer
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the name is empty or longer
    /// than 200 characters.
    pub fn new(
        tenant_id: TenantId,
        email: Email,
        name: impl Into<String>,
        auth_sub: impl Into<String>,
        created_by: UserId,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() || name.chars().count() > 200 {
            return Err(DomainError::validation("name must be 1-200 characters"));
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            tenant_id,
            email,
            name,
            role: UserRole::Viewer,
            status: UserStatus::Active,
            auth_provider: "entra_id".to_string(),
            auth_sub: auth_sub.into(),
            preferences: UserPreferences::default(),
            created_at: now,
            updated_at: now,
            last_login_at: None,
            created_by,
        })
    }

    /// Set the role
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Set the identity provider
    #[must_use]
    pub fn with_auth_provider(mut self, provider: impl Into<String>) -> Self {
        self.auth_provider = provider.into();
        self
    }

    /// Check whether this user can access a space
    ///
    /// Tenant isolation is the hard boundary: a tenant mismatch is always a
    /// denial. Admins can access any space in their tenant. Plain ownership
    /// access is resolved by the caller against the space itself, not here.
    pub fn can_access_space(
        &self,
        _space_owner_id: &UserId,
        space_tenant_id: &TenantId,
    ) -> bool {
        if self.tenant_id != *space_tenant_id {
            return false;
        }

        self.role == UserRole::Admin
    }

    /// Guard for trust boundaries: fail unless the user belongs to `other`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TenantIsolationViolation`] on mismatch.
    pub fn ensure_same_tenant(&self, other_tenant_id: &TenantId) -> Result<(), DomainError> {
        if self.tenant_id != *other_tenant_id {
            return Err(DomainError::TenantIsolationViolation {
                user_tenant: self.tenant_id.to_string(),
                other_tenant: other_tenant_id.to_string(),
            });
        }
        Ok(())
    }

    /// Record a successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Produce a PII-masked projection for logging; `self` is untouched
    ///
    /// Email follows the email masking rule; the name keeps the first
    /// character of each whitespace-separated token.
    pub fn mask_pii(&self) -> MaskedUser {
        let masked_name = self
            .name
            .split_whitespace()
            .map(|token| {
                token
                    .chars()
                    .next()
                    .map_or_else(|| "***".to_string(), |first| format!("{first}***"))
            })
            .collect::<Vec<_>>()
            .join(" ");

        MaskedUser {
            id: self.id,
            tenant_id: self.tenant_id,
            email: mask_email(self.email.as_str()),
            name: masked_name,
            role: self.role,
            status: self.status,
        }
    }
}
