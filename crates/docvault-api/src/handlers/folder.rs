//! Folder CRUD and tree handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use docvault_core::error::AppError;
use docvault_entity::folder::{CreateFolder, FolderNode, FolderRecord, UpdateFolder};

use crate::dto::request::{CreateFolderRequest, RenameFolderRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folder_tree(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FolderNode>>>, AppError> {
    let tree = state.tree_service.folder_tree().await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FolderRecord>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(CreateFolder {
            name: req.name,
            parent_id: req.parent_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            FolderRecord::from(&folder),
            "Folder created",
        )),
    ))
}

/// PUT /api/folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<ApiResponse<FolderRecord>>, AppError> {
    let folder = state
        .folder_service
        .rename_folder(id, UpdateFolder { name: req.name })
        .await?;

    Ok(Json(ApiResponse::with_message(
        FolderRecord::from(&folder),
        "Folder updated",
    )))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.folder_service.delete_folder(id).await?;
    Ok(Json(MessageResponse::ok("Folder deleted")))
}
