//! Full-hierarchy tree handler.

use axum::Json;
use axum::extract::State;

use docvault_core::error::AppError;
use docvault_entity::folder::TreeSnapshot;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/tree
pub async fn get_full_tree(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TreeSnapshot>>, AppError> {
    let snapshot = state.tree_service.full_tree().await?;
    Ok(Json(ApiResponse::ok(snapshot)))
}
