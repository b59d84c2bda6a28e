//! Storage contract consumed by the service layer.
//!
//! Each method is one atomic unit against the backing store; a failed call
//! leaves persisted state unchanged. Structural rules (non-empty deletion
//! guards, label validation, default content) live in the service layer, not
//! here — implementations only provide keyed CRUD, filtered lookups, and
//! referential integrity of the `parent_id`/`folder_id` references.

use async_trait::async_trait;
use uuid::Uuid;

use docvault_core::result::AppResult;
use docvault_entity::document::Document;
use docvault_entity::folder::Folder;

/// Keyed CRUD over folder rows.
#[async_trait]
pub trait FolderStore: Send + Sync + 'static {
    /// Persist a new folder. Fails with a database error if `parent_id`
    /// references a missing folder.
    async fn insert(&self, folder: &Folder) -> AppResult<()>;

    /// Find a folder by ID.
    async fn fetch(&self, id: Uuid) -> AppResult<Option<Folder>>;

    /// List every folder, ordered by name.
    async fn list(&self) -> AppResult<Vec<Folder>>;

    /// Overwrite an existing folder row. Fails with `NotFound` if the row
    /// no longer exists.
    async fn update(&self, folder: &Folder) -> AppResult<()>;

    /// Delete a folder row. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Count the direct child folders of a folder.
    async fn count_children(&self, id: Uuid) -> AppResult<u64>;
}

/// Keyed CRUD over document rows.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Persist a new document. Fails with a database error if `folder_id`
    /// references a missing folder.
    async fn insert(&self, document: &Document) -> AppResult<()>;

    /// Find a document by ID.
    async fn fetch(&self, id: Uuid) -> AppResult<Option<Document>>;

    /// List documents, optionally restricted to one folder.
    ///
    /// Ordered by `updated_at` descending; ties broken by id ascending,
    /// which for UUIDv7 ids equals insertion order.
    async fn list(&self, folder_id: Option<Uuid>) -> AppResult<Vec<Document>>;

    /// Overwrite an existing document row. Fails with `NotFound` if the row
    /// no longer exists.
    async fn update(&self, document: &Document) -> AppResult<()>;

    /// Delete a document row. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Count the documents directly owned by a folder.
    async fn count_in_folder(&self, folder_id: Uuid) -> AppResult<u64>;
}
