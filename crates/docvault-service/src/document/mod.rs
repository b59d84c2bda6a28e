//! Document management services.

pub mod service;

pub use service::DocumentService;
