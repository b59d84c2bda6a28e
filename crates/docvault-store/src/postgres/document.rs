//! PostgreSQL document store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_entity::document::Document;

use crate::traits::DocumentStore;

/// Document storage backed by the `documents` table.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Create a new document store over a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, document: &Document) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO documents (id, title, content, folder_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(document.id)
        .bind(&document.title)
        .bind(&document.content)
        .bind(document.folder_id)
        .bind(document.created_at)
        .bind(document.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::database("Referenced folder does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert document", e),
        })?;
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    async fn list(&self, folder_id: Option<Uuid>) -> AppResult<Vec<Document>> {
        let query = match folder_id {
            Some(folder_id) => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents WHERE folder_id = $1 \
                 ORDER BY updated_at DESC, id ASC",
            )
            .bind(folder_id),
            None => sqlx::query_as::<_, Document>(
                "SELECT * FROM documents ORDER BY updated_at DESC, id ASC",
            ),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    async fn update(&self, document: &Document) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE documents SET title = $2, content = $3, folder_id = $4, updated_at = $5 \
             WHERE id = $1",
        )
        .bind(document.id)
        .bind(&document.title)
        .bind(&document.content)
        .bind(document.folder_id)
        .bind(document.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::database("Referenced folder does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update document", e),
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Document {} not found",
                document.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_in_folder(&self, folder_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE folder_id = $1")
            .bind(folder_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count documents", e)
            })?;
        Ok(count as u64)
    }
}
