//! Infrastructure layer for the retrieval-and-question-answering core
//!
//! In-memory reference implementations of every repository port. Each store
//! owns its own arena (a map from id to entity) with no process-wide shared
//! state: construct one per test or per caller. Production deployments
//! substitute real persistence adapters behind the same ports.

pub mod persistence;

pub use persistence::{
    InMemoryConversationRepository, InMemoryDocumentRepository, InMemoryQueryRepository,
    InMemorySpaceRepository, InMemoryTenantRepository, InMemoryUserRepository,
};
