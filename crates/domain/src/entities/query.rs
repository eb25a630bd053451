//! Query entity - A user question with its answer and citations
//!
//! The answer, citations, and timing metrics are produced by the external
//! retrieval pipeline and recorded here via the `mark_as_*` transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::events::{DomainEvent, QueryCompleted, QueryExecuted, QueryFailed};
use crate::value_objects::{ConversationId, DocumentId, QueryId, SpaceId, TenantId, UserId};

/// Query processing status
///
/// Pending → Processing → Completed | Failed; both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    /// Submitted, not yet processed
    Pending,
    /// Retrieval pipeline working
    Processing,
    /// Answer generated
    Completed,
    /// Error occurred
    Failed,
}

/// Citation linking an answer back to a source document chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub document_id: DocumentId,
    pub chunk_id: String,
    pub document_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Relevance in `[0.0, 1.0]`
    pub relevance_score: f64,
    /// Text snippet from the source, at most 500 characters
    pub excerpt: String,
}

impl Citation {
    /// Create a citation, validating score range and excerpt length
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the relevance score is
    /// outside `[0.0, 1.0]` or the excerpt exceeds 500 characters.
    pub fn new(
        document_id: DocumentId,
        chunk_id: impl Into<String>,
        document_name: impl Into<String>,
        relevance_score: f64,
        excerpt: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&relevance_score) {
            return Err(DomainError::validation(
                "relevance_score must be within 0.0-1.0",
            ));
        }

        let excerpt = excerpt.into();
        if excerpt.chars().count() > 500 {
            return Err(DomainError::validation(
                "excerpt must be at most 500 characters",
            ));
        }

        Ok(Self {
            document_id,
            chunk_id: chunk_id.into(),
            document_name: document_name.into(),
            page_number: None,
            relevance_score,
            excerpt,
        })
    }

    /// Set the page number
    #[must_use]
    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }
}

/// Query entity (one user question within a space)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Unique query identifier
    pub id: QueryId,
    /// Space where the query was executed
    pub space_id: SpaceId,
    /// Tenant isolation
    pub tenant_id: TenantId,
    /// Optional conversation grouping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<ConversationId>,
    /// The question text
    pub question: String,
    /// Question language (en, fr)
    pub language: String,
    /// Generated answer, present once completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Source citations backing the answer
    pub citations: Vec<Citation>,
    /// Processing status
    pub status: QueryStatus,
    /// Error description, present once failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Pipeline processing time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
    /// Tokens consumed by answer generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
    /// User who submitted the query
    pub user_id: UserId,
    /// When the query was created
    pub created_at: DateTime<Utc>,
    /// When processing finished (either outcome)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Pending domain events, drained via `collect_events`
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Query {
    /// Create a new pending query
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the question is empty or
    /// longer than 2000 characters.
    pub fn new(
        space_id: SpaceId,
        tenant_id: TenantId,
        question: impl Into<String>,
        user_id: UserId,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        if question.is_empty() || question.chars().count() > 2000 {
            return Err(DomainError::validation(
                "question must be 1-2000 characters",
            ));
        }

        Ok(Self {
            id: QueryId::new(),
            space_id,
            tenant_id,
            conversation_id: None,
            question,
            language: "en".to_string(),
            answer: None,
            citations: Vec::new(),
            status: QueryStatus::Pending,
            error_message: None,
            processing_time_ms: None,
            tokens_used: None,
            user_id,
            created_at: Utc::now(),
            completed_at: None,
            events: Vec::new(),
        })
    }

    /// Group this query under a conversation
    #[must_use]
    pub fn with_conversation(mut self, conversation_id: ConversationId) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    /// Set the question language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Mark the pipeline as working on this query
    pub fn mark_as_processing(&mut self) {
        self.status = QueryStatus::Processing;
    }

    /// Record a successful answer; unconditional
    pub fn mark_as_completed(
        &mut self,
        answer: impl Into<String>,
        citations: Vec<Citation>,
        processing_time_ms: u64,
    ) {
        self.answer = Some(answer.into());
        self.citations = citations;
        self.status = QueryStatus::Completed;
        self.processing_time_ms = Some(processing_time_ms);
        self.completed_at = Some(Utc::now());
    }

    /// Record a failure; unconditional
    pub fn mark_as_failed(&mut self, error_message: impl Into<String>) {
        self.status = QueryStatus::Failed;
        self.error_message = Some(error_message.into());
        self.completed_at = Some(Utc::now());
    }

    /// Buffer a `QueryExecuted` event
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the event payload fails
    /// validation (questions longer than the event bound of 1000
    /// characters cannot be published).
    pub fn emit_query_executed(&mut self) -> Result<(), DomainError> {
        let event = QueryExecuted::new(
            self.id,
            self.tenant_id,
            self.space_id,
            self.question.clone(),
            self.user_id,
        )?;
        self.events.push(DomainEvent::QueryExecuted(event));
        Ok(())
    }

    /// Buffer a `QueryCompleted` event
    ///
    /// Emit-after-transition: the query must already be completed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PreconditionFailed`] unless the status is
    /// `Completed` and an answer is present, or
    /// [`DomainError::Validation`] if the recorded metrics fail event
    /// validation.
    pub fn emit_query_completed(&mut self) -> Result<(), DomainError> {
        let answer = match (&self.status, &self.answer) {
            (QueryStatus::Completed, Some(answer)) => answer,
            _ => {
                return Err(DomainError::precondition(
                    "cannot emit QueryCompleted: query not completed",
                ));
            },
        };

        let event = QueryCompleted::new(
            self.id,
            self.tenant_id,
            answer.chars().count(),
            self.citations.len(),
            self.processing_time_ms.unwrap_or(0),
            self.tokens_used.unwrap_or(0),
        )?;
        self.events.push(DomainEvent::QueryCompleted(event));
        Ok(())
    }

    /// Buffer a `QueryFailed` event
    ///
    /// Emit-after-transition: the failure must already be recorded.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::PreconditionFailed`] unless the status is
    /// `Failed` and an error message is present.
    pub fn emit_query_failed(&mut self) -> Result<(), DomainError> {
        let error_message = match (&self.status, &self.error_message) {
            (QueryStatus::Failed, Some(message)) => message.clone(),
            _ => {
                return Err(DomainError::precondition(
                    "cannot emit QueryFailed: query not in failed state",
                ));
            },
        };

        let event = QueryFailed::new(self.id, self.tenant_id, "processing_error", error_message)?;
        self.events.push(DomainEvent::QueryFailed(event));
        Ok(())
    }

    /// Return all buffered events and clear the buffer
    pub fn collect_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}
