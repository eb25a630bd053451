//! Space lifecycle events

use serde::Serialize;

use super::EventHeader;
use crate::entities::{DocumentType, SpaceRole, SpaceVisibility};
use crate::errors::DomainError;
use crate::value_objects::{DocumentId, SpaceId, TenantId, UserId};

/// Emitted when a new space is created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceCreated {
    #[serde(flatten)]
    pub header: EventHeader,
    pub space_id: SpaceId,
    pub space_name: String,
    pub owner_id: UserId,
    pub visibility: SpaceVisibility,
}

impl SpaceCreated {
    /// Create the event, validating the payload
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the space name is empty or
    /// longer than 200 characters.
    pub fn new(
        space_id: SpaceId,
        tenant_id: TenantId,
        space_name: impl Into<String>,
        owner_id: UserId,
        visibility: SpaceVisibility,
    ) -> Result<Self, DomainError> {
        let space_name = space_name.into();
        if space_name.is_empty() || space_name.chars().count() > 200 {
            return Err(DomainError::validation(
                "space_name must be 1-200 characters",
            ));
        }

        Ok(Self {
            header: EventHeader::new("SpaceCreated", space_id.to_string(), tenant_id),
            space_id,
            space_name,
            owner_id,
            visibility,
        })
    }
}

/// Emitted when a document is added to a space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentAdded {
    #[serde(flatten)]
    pub header: EventHeader,
    pub space_id: SpaceId,
    pub document_id: DocumentId,
    pub document_name: String,
    pub document_type: DocumentType,
    pub size_bytes: u64,
    pub uploaded_by: UserId,
}

impl DocumentAdded {
    /// Create the event, validating the payload
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the document name is empty or
    /// longer than 255 characters, or if `size_bytes` is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        space_id: SpaceId,
        tenant_id: TenantId,
        document_id: DocumentId,
        document_name: impl Into<String>,
        document_type: DocumentType,
        size_bytes: u64,
        uploaded_by: UserId,
    ) -> Result<Self, DomainError> {
        let document_name = document_name.into();
        if document_name.is_empty() || document_name.chars().count() > 255 {
            return Err(DomainError::validation(
                "document_name must be 1-255 characters",
            ));
        }
        if size_bytes == 0 {
            return Err(DomainError::validation("size_bytes must be positive"));
        }

        Ok(Self {
            header: EventHeader::new("DocumentAdded", space_id.to_string(), tenant_id),
            space_id,
            document_id,
            document_name,
            document_type,
            size_bytes,
            uploaded_by,
        })
    }
}

/// Emitted when a member is added to a space
///
/// The payload is fully typed, so construction cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberAdded {
    #[serde(flatten)]
    pub header: EventHeader,
    pub space_id: SpaceId,
    pub user_id: UserId,
    pub role: SpaceRole,
    pub added_by: UserId,
}

impl MemberAdded {
    /// Create the event
    pub fn new(
        space_id: SpaceId,
        tenant_id: TenantId,
        user_id: UserId,
        role: SpaceRole,
        added_by: UserId,
    ) -> Self {
        Self {
            header: EventHeader::new("MemberAdded", space_id.to_string(), tenant_id),
            space_id,
            user_id,
            role,
            added_by,
        }
    }
}
