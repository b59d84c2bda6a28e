//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docvault_core::config::AppConfig;
use docvault_service::document::DocumentService;
use docvault_service::folder::{FolderService, TreeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Document service
    pub document_service: Arc<DocumentService>,
    /// Tree materialization service
    pub tree_service: Arc<TreeService>,
}
