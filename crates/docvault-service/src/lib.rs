//! # docvault-service
//!
//! Business logic service layer for DocVault. Each service enforces the
//! hierarchy's structural rules over the abstract store contract: folder
//! mutation and deletion safety, document lifecycle and ordering, and
//! recursive tree materialization.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references to the store traits, so any
//! backend (PostgreSQL in production, in-memory in tests) can sit behind
//! them.

pub mod document;
pub mod folder;

pub use document::DocumentService;
pub use folder::{FolderService, TreeService};
