//! Space entity - Container for documents and conversations
//!
//! A space owns its content by reference: it tracks document/conversation
//! counts and byte totals, while the children live as separate aggregates
//! linked by id and tenant id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::events::{DocumentAdded, DomainEvent, MemberAdded, SpaceCreated};
use crate::value_objects::{DocumentId, SpaceId, TenantId, UserId};

use super::DocumentType;

/// Space visibility level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceVisibility {
    /// Only the owner can access
    Private,
    /// Owner plus explicit members can access
    Shared,
    /// All users in the tenant can access
    Public,
}

/// Space lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceStatus {
    Active,
    Archived,
}

/// Role of a member within a space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceRole {
    Viewer,
    Contributor,
    Owner,
}

/// Member of a space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceMember {
    pub user_id: UserId,
    pub role: SpaceRole,
    pub added_at: DateTime<Utc>,
    pub added_by: UserId,
}

impl SpaceMember {
    /// Create a member record stamped with the current time
    pub fn new(user_id: UserId, role: SpaceRole, added_by: UserId) -> Self {
        Self {
            user_id,
            role,
            added_at: Utc::now(),
            added_by,
        }
    }
}

/// Space entity (aggregate root for documents and conversations)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    /// Unique space identifier
    pub id: SpaceId,
    /// Tenant isolation
    pub tenant_id: TenantId,
    /// Space name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Access level
    pub visibility: SpaceVisibility,
    /// Lifecycle status
    pub status: SpaceStatus,
    /// Primary owner
    pub owner_id: UserId,
    /// Explicit members (the owner is not listed here)
    pub members: Vec<SpaceMember>,
    /// Number of documents in the space
    pub document_count: u64,
    /// Number of conversations in the space
    pub conversation_count: u64,
    /// Total size of all documents in bytes
    pub total_size_bytes: u64,
    /// When the space was created
    pub created_at: DateTime<Utc>,
    /// When the space was last updated
    pub updated_at: DateTime<Utc>,
    /// Last content or membership activity
    pub last_activity_at: DateTime<Utc>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Pending domain events, drained via `collect_events`
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Space {
    /// Create a new private, active space
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the name is empty or longer
    /// than 200 characters.
    pub fn new(
        tenant_id: TenantId,
        name: impl Into<String>,
        owner_id: UserId,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() || name.chars().count() > 200 {
            return Err(DomainError::validation("name must be 1-200 characters"));
        }

        let now = Utc::now();
        Ok(Self {
            id: SpaceId::new(),
            tenant_id,
            name,
            description: None,
            visibility: SpaceVisibility::Private,
            status: SpaceStatus::Active,
            owner_id,
            members: Vec::new(),
            document_count: 0,
            conversation_count: 0,
            total_size_bytes: 0,
            created_at: now,
            updated_at: now,
            last_activity_at: now,
            tags: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Set the visibility
    #[must_use]
    pub fn with_visibility(mut self, visibility: SpaceVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set the description
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the description exceeds 2000
    /// characters.
    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, DomainError> {
        let description = description.into();
        if description.chars().count() > 2000 {
            return Err(DomainError::validation(
                "description must be at most 2000 characters",
            ));
        }
        self.description = Some(description);
        Ok(self)
    }

    /// Replace the member list, rejecting duplicates
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateMember`] if any user appears twice.
    pub fn with_members(mut self, members: Vec<SpaceMember>) -> Result<Self, DomainError> {
        for (i, member) in members.iter().enumerate() {
            if members[..i].iter().any(|m| m.user_id == member.user_id) {
                return Err(DomainError::DuplicateMember(member.user_id.to_string()));
            }
        }
        self.members = members;
        Ok(self)
    }

    /// Add a member
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateMember`] if the user is already a
    /// member.
    pub fn add_member(&mut self, member: SpaceMember) -> Result<(), DomainError> {
        if self.members.iter().any(|m| m.user_id == member.user_id) {
            return Err(DomainError::DuplicateMember(member.user_id.to_string()));
        }
        self.members.push(member);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Check whether a user is the owner or a listed member
    pub fn has_member(&self, user_id: &UserId) -> bool {
        *user_id == self.owner_id || self.members.iter().any(|m| m.user_id == *user_id)
    }

    /// Get a user's role in this space
    ///
    /// The owner is always `Owner`; otherwise the stored member role, or
    /// `None` for non-members.
    pub fn get_member_role(&self, user_id: &UserId) -> Option<SpaceRole> {
        if *user_id == self.owner_id {
            return Some(SpaceRole::Owner);
        }
        self.members
            .iter()
            .find(|m| m.user_id == *user_id)
            .map(|m| m.role)
    }

    /// Check whether a user may add documents (owner or contributor)
    pub fn can_add_document(&self, user_id: &UserId) -> bool {
        matches!(
            self.get_member_role(user_id),
            Some(SpaceRole::Owner | SpaceRole::Contributor)
        )
    }

    /// Record that a document was added
    ///
    /// Updates counters and activity timestamps unconditionally; permission
    /// is the caller's job via [`Space::can_add_document`].
    pub fn add_document(&mut self, _document_id: &DocumentId, size_bytes: u64) {
        self.document_count += 1;
        self.total_size_bytes += size_bytes;
        let now = Utc::now();
        self.last_activity_at = now;
        self.updated_at = now;
    }

    /// Record that a conversation was started
    pub fn add_conversation(&mut self) {
        self.conversation_count += 1;
        let now = Utc::now();
        self.last_activity_at = now;
        self.updated_at = now;
    }

    /// Archive the space
    pub fn archive(&mut self) {
        self.status = SpaceStatus::Archived;
        self.updated_at = Utc::now();
    }

    /// Buffer a `SpaceCreated` event reflecting current state
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the event payload fails
    /// validation.
    pub fn emit_space_created(&mut self) -> Result<(), DomainError> {
        let event = SpaceCreated::new(
            self.id,
            self.tenant_id,
            self.name.clone(),
            self.owner_id,
            self.visibility,
        )?;
        self.events.push(DomainEvent::SpaceCreated(event));
        Ok(())
    }

    /// Buffer a `DocumentAdded` event
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the event payload fails
    /// validation.
    pub fn emit_document_added(
        &mut self,
        document_id: DocumentId,
        document_name: impl Into<String>,
        document_type: DocumentType,
        size_bytes: u64,
        uploaded_by: UserId,
    ) -> Result<(), DomainError> {
        let event = DocumentAdded::new(
            self.id,
            self.tenant_id,
            document_id,
            document_name,
            document_type,
            size_bytes,
            uploaded_by,
        )?;
        self.events.push(DomainEvent::DocumentAdded(event));
        Ok(())
    }

    /// Buffer a `MemberAdded` event
    pub fn emit_member_added(&mut self, user_id: UserId, role: SpaceRole, added_by: UserId) {
        let event = MemberAdded::new(self.id, self.tenant_id, user_id, role, added_by);
        self.events.push(DomainEvent::MemberAdded(event));
    }

    /// Return all buffered events and clear the buffer
    ///
    /// Ownership of the events transfers to the caller; a caller that
    /// drains exactly once never double-publishes.
    pub fn collect_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}
