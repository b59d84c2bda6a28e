//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse for AppError` implementation and the
//! [`ApiErrorResponse`] body live in `docvault-core` (where `AppError` is
//! defined) so the trait impl satisfies Rust's coherence rules. They are
//! re-exported here to preserve this crate's public error surface.

pub use docvault_core::error::ApiErrorResponse;
