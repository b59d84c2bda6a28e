//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A text document, optionally placed inside a folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// Owning folder ID (null for root-level documents).
    pub folder_id: Option<Uuid>,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Construct a new document with a fresh UUIDv7 identifier and current
    /// timestamps.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        folder_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: crate::id::next_id(),
            title: title.into(),
            content: content.into(),
            folder_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this document lives at the hierarchy root.
    pub fn is_root(&self) -> bool {
        self.folder_id.is_none()
    }
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Document title.
    pub title: String,
    /// Document body; a titled placeholder is generated when omitted.
    pub content: Option<String>,
    /// Owning folder (None for root).
    pub folder_id: Option<Uuid>,
}

/// Partial update applied to an existing document.
///
/// `folder_id` is a double option: `None` leaves the placement untouched,
/// `Some(None)` moves the document to the root, `Some(Some(id))` moves it
/// into the given folder. Absent fields are left untouched; the update
/// itself always refreshes `updated_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New placement.
    pub folder_id: Option<Option<Uuid>>,
}
