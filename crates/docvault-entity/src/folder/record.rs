//! Flat transport projection of a folder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kind::EntryKind;

use super::model::Folder;

/// The wire representation of a folder.
///
/// Key casing is part of the external contract: reference fields stay
/// snake_case while timestamps are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<Uuid>,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Entry type tag, always `"folder"`.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl From<&Folder> for FolderRecord {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
            kind: EntryKind::Folder,
        }
    }
}
