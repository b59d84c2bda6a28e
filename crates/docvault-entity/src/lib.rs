//! # docvault-entity
//!
//! Domain entity models for DocVault. Every struct in this crate represents
//! a database table row, a mutation payload, or a transport record. Database
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! `sqlx::FromRow`.

pub mod document;
pub mod folder;
mod id;
mod kind;

pub use kind::EntryKind;
