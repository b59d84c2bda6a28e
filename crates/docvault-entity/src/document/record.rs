//! Flat transport projection of a document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kind::EntryKind;

use super::model::Document;

/// The wire representation of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document ID.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// Owning folder ID (null for root-level documents).
    pub folder_id: Option<Uuid>,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Entry type tag, always `"document"`.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl From<&Document> for DocumentRecord {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title.clone(),
            content: doc.content.clone(),
            folder_id: doc.folder_id,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            kind: EntryKind::Document,
        }
    }
}
