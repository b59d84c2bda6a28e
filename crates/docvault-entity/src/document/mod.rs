//! Document entity: row model, mutation payloads, and transport record.

pub mod model;
pub mod record;

pub use model::{CreateDocument, Document, UpdateDocument};
pub use record::DocumentRecord;
