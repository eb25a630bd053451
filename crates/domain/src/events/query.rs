//! Query lifecycle events

use serde::Serialize;

use super::EventHeader;
use crate::errors::DomainError;
use crate::value_objects::{QueryId, SpaceId, TenantId, UserId};

/// Emitted when a query is submitted to the retrieval pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryExecuted {
    #[serde(flatten)]
    pub header: EventHeader,
    pub query_id: QueryId,
    pub space_id: SpaceId,
    pub question: String,
    pub user_id: UserId,
}

impl QueryExecuted {
    /// Create the event, validating the payload
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the question is empty or
    /// longer than 1000 characters.
    pub fn new(
        query_id: QueryId,
        tenant_id: TenantId,
        space_id: SpaceId,
        question: impl Into<String>,
        user_id: UserId,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        if question.is_empty() || question.chars().count() > 1000 {
            return Err(DomainError::validation(
                "question must be 1-1000 characters",
            ));
        }

        Ok(Self {
            header: EventHeader::new("QueryExecuted", query_id.to_string(), tenant_id),
            query_id,
            space_id,
            question,
            user_id,
        })
    }
}

/// Emitted when query processing completes successfully
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryCompleted {
    #[serde(flatten)]
    pub header: EventHeader,
    pub query_id: QueryId,
    pub answer_length: usize,
    pub citation_count: usize,
    pub processing_time_ms: u64,
    pub tokens_used: u64,
}

impl QueryCompleted {
    /// Create the event, validating the payload
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if `processing_time_ms` is zero.
    pub fn new(
        query_id: QueryId,
        tenant_id: TenantId,
        answer_length: usize,
        citation_count: usize,
        processing_time_ms: u64,
        tokens_used: u64,
    ) -> Result<Self, DomainError> {
        if processing_time_ms == 0 {
            return Err(DomainError::validation(
                "processing_time_ms must be positive",
            ));
        }

        Ok(Self {
            header: EventHeader::new("QueryCompleted", query_id.to_string(), tenant_id),
            query_id,
            answer_length,
            citation_count,
            processing_time_ms,
            tokens_used,
        })
    }
}

/// Emitted when query processing fails
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryFailed {
    #[serde(flatten)]
    pub header: EventHeader,
    pub query_id: QueryId,
    pub error_type: String,
    pub error_message: String,
}

impl QueryFailed {
    /// Create the event, validating the payload
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if `error_type` exceeds 50
    /// characters, `error_message` exceeds 500 characters, or either is
    /// empty.
    pub fn new(
        query_id: QueryId,
        tenant_id: TenantId,
        error_type: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let error_type = error_type.into();
        if error_type.is_empty() || error_type.chars().count() > 50 {
            return Err(DomainError::validation(
                "error_type must be 1-50 characters",
            ));
        }

        let error_message = error_message.into();
        if error_message.is_empty() || error_message.chars().count() > 500 {
            return Err(DomainError::validation(
                "error_message must be 1-500 characters",
            ));
        }

        Ok(Self {
            header: EventHeader::new("QueryFailed", query_id.to_string(), tenant_id),
            query_id,
            error_type,
            error_message,
        })
    }
}
