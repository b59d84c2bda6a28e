//! Document CRUD operations, placement, and ordering.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_entity::document::{CreateDocument, Document, UpdateDocument};
use docvault_store::{DocumentStore, FolderStore};

/// Manages document CRUD operations.
#[derive(Clone)]
pub struct DocumentService {
    /// Document storage.
    documents: Arc<dyn DocumentStore>,
    /// Folder storage, consulted when placing documents.
    folders: Arc<dyn FolderStore>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(documents: Arc<dyn DocumentStore>, folders: Arc<dyn FolderStore>) -> Self {
        Self { documents, folders }
    }

    /// Gets a document by ID.
    pub async fn get_document(&self, document_id: Uuid) -> Result<Document, AppError> {
        self.documents
            .fetch(document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))
    }

    /// Lists documents, optionally restricted to one folder, ordered by
    /// most recently updated first.
    pub async fn list_documents(&self, folder_id: Option<Uuid>) -> Result<Vec<Document>, AppError> {
        self.documents.list(folder_id).await
    }

    /// Creates a new document.
    ///
    /// When no body is supplied the document starts from a titled
    /// placeholder.
    pub async fn create_document(&self, req: CreateDocument) -> Result<Document, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Document title cannot be empty"));
        }

        if let Some(folder_id) = req.folder_id {
            self.folders
                .fetch(folder_id)
                .await?
                .ok_or_else(|| AppError::not_found("Folder not found"))?;
        }

        let content = req
            .content
            .unwrap_or_else(|| default_content(&req.title));
        let document = Document::new(req.title, content, req.folder_id);
        self.documents.insert(&document).await?;

        info!(
            document_id = %document.id,
            title = %document.title,
            "Document created"
        );

        Ok(document)
    }

    /// Applies a partial update to a document.
    ///
    /// Only supplied fields are overwritten; `updated_at` is refreshed even
    /// by an empty patch. Supplying `folder_id: null` moves the document to
    /// the hierarchy root.
    pub async fn update_document(
        &self,
        document_id: Uuid,
        patch: UpdateDocument,
    ) -> Result<Document, AppError> {
        let mut document = self.get_document(document_id).await?;

        if let Some(title) = patch.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Document title cannot be empty"));
            }
            document.title = title;
        }
        if let Some(content) = patch.content {
            document.content = content;
        }
        if let Some(placement) = patch.folder_id {
            if let Some(folder_id) = placement {
                self.folders
                    .fetch(folder_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Folder not found"))?;
            }
            document.folder_id = placement;
        }
        document.updated_at = Utc::now();

        self.documents.update(&document).await?;

        info!(
            document_id = %document_id,
            title = %document.title,
            "Document updated"
        );

        Ok(document)
    }

    /// Deletes a document. Documents carry no emptiness constraint, so
    /// deletion is unconditional.
    pub async fn delete_document(&self, document_id: Uuid) -> Result<(), AppError> {
        let document = self.get_document(document_id).await?;

        self.documents.delete(document_id).await?;

        info!(
            document_id = %document_id,
            title = %document.title,
            "Document deleted"
        );

        Ok(())
    }
}

/// Placeholder body for documents created without content: the title as a
/// heading followed by a writing prompt.
fn default_content(title: &str) -> String {
    format!("# {title}\n\nStart writing your content...")
}
