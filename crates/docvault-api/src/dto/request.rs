//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Parent folder ID (omit for a root folder).
    pub parent_id: Option<Uuid>,
}

/// Rename folder request body. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameFolderRequest {
    /// New folder name.
    pub name: Option<String>,
}

/// Create document request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Document title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Document body (a titled placeholder is generated when omitted).
    pub content: Option<String>,
    /// Owning folder ID (omit for a root-level document).
    pub folder_id: Option<Uuid>,
}

/// Update document request body. All fields optional; only supplied fields
/// are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New placement. An absent key keeps the current folder; an explicit
    /// `null` moves the document to the root.
    #[serde(default, deserialize_with = "some_or_null")]
    pub folder_id: Option<Option<Uuid>>,
}

/// Query parameters for listing documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDocumentsQuery {
    /// Restrict the listing to one folder.
    pub folder_id: Option<Uuid>,
}

/// Deserializes a present-but-possibly-null key into `Some(inner)`, keeping
/// it distinguishable from an absent key (which falls back to the field's
/// `None` default).
fn some_or_null<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}
