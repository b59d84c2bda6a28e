//! # docvault-store
//!
//! Persistence layer for DocVault. Defines the storage contract consumed by
//! the service layer ([`traits::FolderStore`], [`traits::DocumentStore`]) and
//! ships two implementations: the PostgreSQL backend used in production and
//! an in-memory backend for tests and embedding.

pub mod memory;
pub mod postgres;
pub mod traits;

pub use memory::MemoryStore;
pub use postgres::DatabasePool;
pub use traits::{DocumentStore, FolderStore};
