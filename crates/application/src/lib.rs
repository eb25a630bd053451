//! Application layer for the retrieval-and-question-answering core
//!
//! Defines the ports (repository contracts) a persistence adapter must
//! implement, together with the application-level error type. The service
//! orchestration that drives the retrieval pipeline lives outside this
//! workspace and consumes these contracts.

pub mod error;
pub mod ports;

pub use error::ApplicationError;
pub use ports::{
    ConversationRepository, DocumentRepository, QueryRepository, SpaceRepository,
    TenantRepository, UserRepository,
};
