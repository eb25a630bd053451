//! Domain events - Immutable records of completed state transitions
//!
//! Events are buffered on the aggregate that emits them and drained by the
//! caller through `collect_events`, which hands ownership (and the duty to
//! dispatch) downstream. Every event carries the shared [`EventHeader`];
//! payload constraints are checked in each event's constructor so an
//! invalid event is never observable.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{EventId, TenantId};

mod query;
mod space;

pub use query::{QueryCompleted, QueryExecuted, QueryFailed};
pub use space::{DocumentAdded, MemberAdded, SpaceCreated};

/// Shared fields carried by every domain event
///
/// The header is immutable once constructed. Typed inputs make the base
/// constraints (non-empty tenant, well-formed ids, UTC timestamp)
/// unrepresentable rather than checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventHeader {
    /// Unique identifier for this event occurrence
    pub event_id: EventId,
    /// Event type name, e.g. `SpaceCreated`
    pub event_type: String,
    /// ID of the aggregate root that emitted the event
    pub aggregate_id: String,
    /// Tenant isolation boundary
    pub tenant_id: TenantId,
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,
    /// Additional context (user id, request id, ...)
    pub metadata: HashMap<String, serde_json::Value>,
}

impl EventHeader {
    /// Create a new header stamped with a fresh event ID and the current time
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        tenant_id: TenantId,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            event_type: event_type.into(),
            aggregate_id: aggregate_id.into(),
            tenant_id,
            timestamp: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Any event emitted by an aggregate in this domain
///
/// Aggregates buffer these until the caller drains them; the enum keeps the
/// buffer homogeneous while each variant stays a fully-typed struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DomainEvent {
    SpaceCreated(SpaceCreated),
    DocumentAdded(DocumentAdded),
    MemberAdded(MemberAdded),
    QueryExecuted(QueryExecuted),
    QueryCompleted(QueryCompleted),
    QueryFailed(QueryFailed),
}

impl DomainEvent {
    /// The shared header of the wrapped event
    pub fn header(&self) -> &EventHeader {
        match self {
            Self::SpaceCreated(e) => &e.header,
            Self::DocumentAdded(e) => &e.header,
            Self::MemberAdded(e) => &e.header,
            Self::QueryExecuted(e) => &e.header,
            Self::QueryCompleted(e) => &e.header,
            Self::QueryFailed(e) => &e.header,
        }
    }

    /// Event type name, e.g. `QueryCompleted`
    pub fn event_type(&self) -> &str {
        &self.header().event_type
    }

    /// Tenant the event belongs to
    pub fn tenant_id(&self) -> TenantId {
        self.header().tenant_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_stamps_identity_and_time() {
        let tenant_id = TenantId::new();
        let header = EventHeader::new("SpaceCreated", "space-1", tenant_id);

        assert_eq!(header.event_type, "SpaceCreated");
        assert_eq!(header.aggregate_id, "space-1");
        assert_eq!(header.tenant_id, tenant_id);
        assert!(header.metadata.is_empty());
    }

    #[test]
    fn header_event_ids_are_unique() {
        let tenant_id = TenantId::new();
        let h1 = EventHeader::new("X", "a", tenant_id);
        let h2 = EventHeader::new("X", "a", tenant_id);
        assert_ne!(h1.event_id, h2.event_id);
    }

    #[test]
    fn metadata_can_be_attached() {
        let header = EventHeader::new("X", "a", TenantId::new())
            .with_metadata("request_id", serde_json::json!("req-7"))
            .with_metadata("source", serde_json::json!("api"));

        assert_eq!(header.metadata.len(), 2);
        assert_eq!(
            header.metadata.get("request_id"),
            Some(&serde_json::json!("req-7"))
        );
    }
}
