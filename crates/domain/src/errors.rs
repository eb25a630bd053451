//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// Every variant is a synchronous programming/data error surfaced to the
/// caller at construction or method-call time; nothing here is transient or
/// retryable. Absent lookup results are represented as `Option::None`, not
/// as an error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Invalid phone number format
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Invalid social insurance number format
    #[error("Invalid SIN: {0}")]
    InvalidSin(String),

    /// Checksum validation failed
    #[error("Invalid checksum: {0}")]
    InvalidChecksum(String),

    /// Entity or event field violates its constraint
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A space member appears more than once
    #[error("Duplicate member: {0}")]
    DuplicateMember(String),

    /// Cross-tenant access attempted at a trust boundary
    #[error("Tenant isolation violation: tenant {user_tenant} does not match {other_tenant}")]
    TenantIsolationViolation {
        user_tenant: String,
        other_tenant: String,
    },

    /// Business method invoked out of order
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionFailed(message.into())
    }
}
