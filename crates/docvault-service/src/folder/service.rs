//! Folder CRUD operations and deletion safety.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_entity::folder::{CreateFolder, Folder, UpdateFolder};
use docvault_store::{DocumentStore, FolderStore};

/// Manages folder CRUD operations.
///
/// Folders may only be deleted while empty; deletion never cascades into
/// children or documents.
#[derive(Clone)]
pub struct FolderService {
    /// Folder storage.
    folders: Arc<dyn FolderStore>,
    /// Document storage, consulted by the deletion guard.
    documents: Arc<dyn DocumentStore>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folders: Arc<dyn FolderStore>, documents: Arc<dyn DocumentStore>) -> Self {
        Self { folders, documents }
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: Uuid) -> Result<Folder, AppError> {
        self.folders
            .fetch(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Creates a new folder.
    pub async fn create_folder(&self, req: CreateFolder) -> Result<Folder, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        // Verify the parent exists before handing the row to the store
        if let Some(parent_id) = req.parent_id {
            self.folders
                .fetch(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
        }

        let folder = Folder::new(req.name, req.parent_id);
        self.folders.insert(&folder).await?;

        info!(
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames a folder.
    ///
    /// An empty patch is a no-op success that still refreshes `updated_at`.
    pub async fn rename_folder(
        &self,
        folder_id: Uuid,
        patch: UpdateFolder,
    ) -> Result<Folder, AppError> {
        let mut folder = self.get_folder(folder_id).await?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Folder name cannot be empty"));
            }
            folder.name = name;
        }
        folder.updated_at = Utc::now();

        self.folders.update(&folder).await?;

        info!(
            folder_id = %folder_id,
            name = %folder.name,
            "Folder renamed"
        );

        Ok(folder)
    }

    /// Deletes a folder.
    ///
    /// Fails with `NotEmpty` while the folder owns any child folder or any
    /// document; contents must be removed first.
    pub async fn delete_folder(&self, folder_id: Uuid) -> Result<(), AppError> {
        let folder = self.get_folder(folder_id).await?;

        let child_count = self.folders.count_children(folder_id).await?;
        let document_count = self.documents.count_in_folder(folder_id).await?;
        if child_count > 0 || document_count > 0 {
            return Err(AppError::not_empty(
                "Folder is not empty and cannot be deleted",
            ));
        }

        self.folders.delete(folder_id).await?;

        info!(
            folder_id = %folder_id,
            name = %folder.name,
            "Folder deleted"
        );

        Ok(())
    }
}
