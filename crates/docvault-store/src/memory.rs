//! In-memory, HashMap-based storage backend.
//!
//! Intended for tests and embedding. Rows are held behind `RwLock`s for safe
//! concurrent access and cloned on read/write. Mirrors the PostgreSQL
//! backend's semantics exactly: the same listing order, the same referential
//! checks, the same `NotFound` behavior on stale updates.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_entity::document::Document;
use docvault_entity::folder::Folder;

use crate::traits::{DocumentStore, FolderStore};

/// In-memory store implementing both halves of the storage contract.
#[derive(Default)]
pub struct MemoryStore {
    folders: RwLock<HashMap<Uuid, Folder>>,
    documents: RwLock<HashMap<Uuid, Document>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of folders currently stored.
    pub fn folder_count(&self) -> usize {
        self.folders.read().expect("lock poisoned").len()
    }

    /// Number of documents currently stored.
    pub fn document_count(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }

    /// Remove all rows from the store.
    pub fn clear(&self) {
        self.folders.write().expect("lock poisoned").clear();
        self.documents.write().expect("lock poisoned").clear();
    }

    fn folder_exists(&self, id: Uuid) -> bool {
        self.folders.read().expect("lock poisoned").contains_key(&id)
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn insert(&self, folder: &Folder) -> AppResult<()> {
        if let Some(parent_id) = folder.parent_id {
            if !self.folder_exists(parent_id) {
                return Err(AppError::database("Referenced parent folder does not exist"));
            }
        }
        self.folders
            .write()
            .expect("lock poisoned")
            .insert(folder.id, folder.clone());
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> AppResult<Option<Folder>> {
        Ok(self.folders.read().expect("lock poisoned").get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Folder>> {
        let map = self.folders.read().expect("lock poisoned");
        let mut folders: Vec<Folder> = map.values().cloned().collect();
        folders.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(folders)
    }

    async fn update(&self, folder: &Folder) -> AppResult<()> {
        let mut map = self.folders.write().expect("lock poisoned");
        match map.get_mut(&folder.id) {
            Some(row) => {
                *row = folder.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Folder {} not found",
                folder.id
            ))),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let referenced_by_folder = self
            .folders
            .read()
            .expect("lock poisoned")
            .values()
            .any(|f| f.parent_id == Some(id));
        let referenced_by_document = self
            .documents
            .read()
            .expect("lock poisoned")
            .values()
            .any(|d| d.folder_id == Some(id));
        if referenced_by_folder || referenced_by_document {
            return Err(AppError::database(format!(
                "Folder {id} is still referenced"
            )));
        }
        Ok(self
            .folders
            .write()
            .expect("lock poisoned")
            .remove(&id)
            .is_some())
    }

    async fn count_children(&self, id: Uuid) -> AppResult<u64> {
        let map = self.folders.read().expect("lock poisoned");
        Ok(map.values().filter(|f| f.parent_id == Some(id)).count() as u64)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, document: &Document) -> AppResult<()> {
        if let Some(folder_id) = document.folder_id {
            if !self.folder_exists(folder_id) {
                return Err(AppError::database("Referenced folder does not exist"));
            }
        }
        self.documents
            .write()
            .expect("lock poisoned")
            .insert(document.id, document.clone());
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> AppResult<Option<Document>> {
        Ok(self
            .documents
            .read()
            .expect("lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn list(&self, folder_id: Option<Uuid>) -> AppResult<Vec<Document>> {
        let map = self.documents.read().expect("lock poisoned");
        let mut documents: Vec<Document> = map
            .values()
            .filter(|d| folder_id.is_none() || d.folder_id == folder_id)
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        Ok(documents)
    }

    async fn update(&self, document: &Document) -> AppResult<()> {
        if let Some(folder_id) = document.folder_id {
            if !self.folder_exists(folder_id) {
                return Err(AppError::database("Referenced folder does not exist"));
            }
        }
        let mut map = self.documents.write().expect("lock poisoned");
        match map.get_mut(&document.id) {
            Some(row) => {
                *row = document.clone();
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Document {} not found",
                document.id
            ))),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self
            .documents
            .write()
            .expect("lock poisoned")
            .remove(&id)
            .is_some())
    }

    async fn count_in_folder(&self, folder_id: Uuid) -> AppResult<u64> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map
            .values()
            .filter(|d| d.folder_id == Some(folder_id))
            .count() as u64)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("folders", &self.folder_count())
            .field("documents", &self.document_count())
            .finish()
    }
}
