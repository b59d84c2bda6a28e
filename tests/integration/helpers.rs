//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use docvault_api::state::AppState;
use docvault_core::config::app::ServerConfig;
use docvault_core::config::database::DatabaseConfig;
use docvault_core::config::logging::LoggingConfig;
use docvault_core::config::AppConfig;
use docvault_service::document::DocumentService;
use docvault_service::folder::{FolderService, TreeService};
use docvault_store::{DocumentStore, FolderStore, MemoryStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory store behind the router, for direct inspection
    pub store: Arc<MemoryStore>,
}

/// A decoded test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null when the body is empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://unused-in-tests".to_string(),
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            logging: LoggingConfig::default(),
        };

        let store = Arc::new(MemoryStore::new());
        let folders: Arc<dyn FolderStore> = store.clone();
        let documents: Arc<dyn DocumentStore> = store.clone();

        let state = AppState {
            config: Arc::new(config),
            folder_service: Arc::new(FolderService::new(
                Arc::clone(&folders),
                Arc::clone(&documents),
            )),
            document_service: Arc::new(DocumentService::new(
                Arc::clone(&documents),
                Arc::clone(&folders),
            )),
            tree_service: Arc::new(TreeService::new(folders, documents)),
        };

        Self {
            router: docvault_api::router::build_router(state),
            store,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let request_body = match body {
            Some(value) => Body::from(serde_json::to_string(&value).expect("serialize body")),
            None => Body::empty(),
        };

        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(request_body)
            .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse body")
        };

        TestResponse { status, body }
    }

    /// Create a folder and return its id
    pub async fn create_folder(&self, name: &str, parent_id: Option<&str>) -> String {
        let mut payload = serde_json::json!({ "name": name });
        if let Some(parent_id) = parent_id {
            payload["parent_id"] = Value::String(parent_id.to_string());
        }

        let response = self.request("POST", "/api/folders", Some(payload)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "folder create failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("folder id")
            .to_string()
    }

    /// Create a document and return its id
    pub async fn create_document(
        &self,
        title: &str,
        content: Option<&str>,
        folder_id: Option<&str>,
    ) -> String {
        let mut payload = serde_json::json!({ "title": title });
        if let Some(content) = content {
            payload["content"] = Value::String(content.to_string());
        }
        if let Some(folder_id) = folder_id {
            payload["folder_id"] = Value::String(folder_id.to_string());
        }

        let response = self.request("POST", "/api/documents", Some(payload)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "document create failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("document id")
            .to_string()
    }
}
