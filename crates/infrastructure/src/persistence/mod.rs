//! In-memory reference stores
//!
//! All adapters share the same shape: a `parking_lot::RwLock` around a
//! `HashMap` keyed by entity id. The async signatures exist for the
//! benefit of real backing stores; nothing here blocks. Pagination is
//! plain `skip`/`take` over the map's iteration order, which is stable
//! only within a single store instance.

mod conversation_repository;
mod document_repository;
mod query_repository;
mod space_repository;
mod tenant_repository;
mod user_repository;

pub use conversation_repository::InMemoryConversationRepository;
pub use document_repository::InMemoryDocumentRepository;
pub use query_repository::InMemoryQueryRepository;
pub use space_repository::InMemorySpaceRepository;
pub use tenant_repository::InMemoryTenantRepository;
pub use user_repository::InMemoryUserRepository;
