//! Document CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use docvault_core::error::AppError;
use docvault_entity::document::{CreateDocument, DocumentRecord, UpdateDocument};

use crate::dto::request::{CreateDocumentRequest, ListDocumentsQuery, UpdateDocumentRequest};
use crate::dto::response::{ApiResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/documents?folder_id=...
pub async fn list_documents(
    State(state): State<AppState>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<Json<ListResponse<DocumentRecord>>, AppError> {
    let documents = state
        .document_service
        .list_documents(query.folder_id)
        .await?;

    let records = documents.iter().map(DocumentRecord::from).collect();
    Ok(Json(ListResponse::ok(records)))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DocumentRecord>>, AppError> {
    let document = state.document_service.get_document(id).await?;
    Ok(Json(ApiResponse::ok(DocumentRecord::from(&document))))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentRecord>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let document = state
        .document_service
        .create_document(CreateDocument {
            title: req.title,
            content: req.content,
            folder_id: req.folder_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            DocumentRecord::from(&document),
            "Document created",
        )),
    ))
}

/// PUT /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentRecord>>, AppError> {
    let document = state
        .document_service
        .update_document(
            id,
            UpdateDocument {
                title: req.title,
                content: req.content,
                folder_id: req.folder_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        DocumentRecord::from(&document),
        "Document updated",
    )))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.document_service.delete_document(id).await?;
    Ok(Json(MessageResponse::ok("Document deleted")))
}
