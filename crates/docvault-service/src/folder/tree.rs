//! Tree materialization: assembling the folder hierarchy into nested nodes.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use docvault_core::error::AppError;
use docvault_entity::document::{Document, DocumentRecord};
use docvault_entity::folder::{Folder, FolderNode, TreeSnapshot};
use docvault_store::{DocumentStore, FolderStore};

/// Builds folder trees from flat store snapshots.
///
/// Materialization is read-only and recomputed on every call — the tree
/// reflects whatever state the underlying reads observe, with no caching.
#[derive(Clone)]
pub struct TreeService {
    /// Folder storage.
    folders: Arc<dyn FolderStore>,
    /// Document storage.
    documents: Arc<dyn DocumentStore>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folders: Arc<dyn FolderStore>, documents: Arc<dyn DocumentStore>) -> Self {
        Self { folders, documents }
    }

    /// Materializes every root folder into its full recursive subtree.
    pub async fn folder_tree(&self) -> Result<Vec<FolderNode>, AppError> {
        let (folders, mut docs_by_folder) = self.snapshot().await?;
        Ok(build_forest(&folders, &mut docs_by_folder))
    }

    /// Materializes the complete hierarchy: root folder subtrees plus the
    /// documents that live outside any folder.
    pub async fn full_tree(&self) -> Result<TreeSnapshot, AppError> {
        let (folders, mut docs_by_folder) = self.snapshot().await?;
        let tree = build_forest(&folders, &mut docs_by_folder);
        let documents = docs_by_folder
            .remove(&None)
            .unwrap_or_default()
            .iter()
            .map(DocumentRecord::from)
            .collect();

        Ok(TreeSnapshot {
            folders: tree,
            documents,
        })
    }

    /// One flat read of each table; documents bucketed by owning folder,
    /// preserving the store's most-recently-updated order within each
    /// bucket.
    async fn snapshot(
        &self,
    ) -> Result<(Vec<Folder>, HashMap<Option<Uuid>, Vec<Document>>), AppError> {
        let folders = self.folders.list().await?;
        let documents = self.documents.list(None).await?;

        let mut docs_by_folder: HashMap<Option<Uuid>, Vec<Document>> = HashMap::new();
        for document in documents {
            docs_by_folder
                .entry(document.folder_id)
                .or_default()
                .push(document);
        }

        Ok((folders, docs_by_folder))
    }
}

/// Builds the subtree of every root folder in the snapshot.
fn build_forest(
    all_folders: &[Folder],
    docs_by_folder: &mut HashMap<Option<Uuid>, Vec<Document>>,
) -> Vec<FolderNode> {
    all_folders
        .iter()
        .filter(|f| f.is_root())
        .map(|root| build_node(root, all_folders, docs_by_folder))
        .collect()
}

/// Recursively materializes one folder node from the flat snapshot.
///
/// Children are found by walking parent→child edges, so rows whose parent
/// chain never reaches a root (a hand-corrupted cycle) are simply never
/// visited — the walk cannot diverge.
fn build_node(
    folder: &Folder,
    all_folders: &[Folder],
    docs_by_folder: &mut HashMap<Option<Uuid>, Vec<Document>>,
) -> FolderNode {
    let children: Vec<FolderNode> = all_folders
        .iter()
        .filter(|f| f.parent_id == Some(folder.id))
        .map(|child| build_node(child, all_folders, docs_by_folder))
        .collect();

    let documents = docs_by_folder
        .remove(&Some(folder.id))
        .unwrap_or_default()
        .iter()
        .map(DocumentRecord::from)
        .collect();

    FolderNode::new(folder, children, documents)
}
