//! Folder tree structures for hierarchical responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::DocumentRecord;
use crate::kind::EntryKind;

use super::model::Folder;

/// A node in a materialized folder tree.
///
/// Carries the same flat fields as [`super::FolderRecord`] plus the folder's
/// recursively materialized children and its directly-owned documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
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
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
    /// Documents directly owned by this folder.
    pub documents: Vec<DocumentRecord>,
}

impl FolderNode {
    /// Build a node from a folder row and its already-materialized contents.
    pub fn new(folder: &Folder, children: Vec<FolderNode>, documents: Vec<DocumentRecord>) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
            kind: EntryKind::Folder,
            children,
            documents,
        }
    }
}

/// The full hierarchy: every root folder's subtree plus the documents that
/// live at the root, outside any folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Root folder subtrees.
    pub folders: Vec<FolderNode>,
    /// Root-level documents (no folder).
    pub documents: Vec<DocumentRecord>,
}
