//! # docvault-api
//!
//! HTTP API layer for DocVault built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging, compression),
//! DTOs, and error mapping. The handlers are thin: extract, call a service,
//! envelope the result.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
