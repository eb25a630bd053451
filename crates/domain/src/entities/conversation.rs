//! Conversation entity - Groups related queries into a thread

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{ConversationId, QueryId, SpaceId, TenantId, UserId};

/// Conversation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    Active,
    Archived,
}

/// Conversation entity (grouping of queries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier
    pub id: ConversationId,
    /// Parent space
    pub space_id: SpaceId,
    /// Tenant isolation
    pub tenant_id: TenantId,
    /// Conversation title
    pub title: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle status
    pub status: ConversationStatus,
    /// Number of queries attached to this conversation
    pub query_count: u64,
    /// When the most recent query was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_query_at: Option<DateTime<Utc>>,
    /// Owning user
    pub user_id: UserId,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
    /// When the conversation was last updated
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new active conversation
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the title is empty or longer
    /// than 200 characters.
    pub fn new(
        space_id: SpaceId,
        tenant_id: TenantId,
        title: impl Into<String>,
        user_id: UserId,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.is_empty() || title.chars().count() > 200 {
            return Err(DomainError::validation("title must be 1-200 characters"));
        }

        let now = Utc::now();
        Ok(Self {
            id: ConversationId::new(),
            space_id,
            tenant_id,
            title,
            description: None,
            status: ConversationStatus::Active,
            query_count: 0,
            last_query_at: None,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set the description
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the description exceeds 1000
    /// characters.
    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, DomainError> {
        let description = description.into();
        if description.chars().count() > 1000 {
            return Err(DomainError::validation(
                "description must be at most 1000 characters",
            ));
        }
        self.description = Some(description);
        Ok(self)
    }

    /// Record that a query was attached to this conversation
    pub fn add_query(&mut self, _query_id: &QueryId) {
        self.query_count += 1;
        let now = Utc::now();
        self.last_query_at = Some(now);
        self.updated_at = now;
    }

    /// Archive the conversation
    pub fn archive(&mut self) {
        self.status = ConversationStatus::Archived;
        self.updated_at = Utc::now();
    }
}
