//! DocVault Server — Document Management Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_service::document::DocumentService;
use docvault_service::folder::{FolderService, TreeService};
use docvault_store::postgres::{PgDocumentStore, PgFolderStore};
use docvault_store::{DatabasePool, DocumentStore, FolderStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("DOCVAULT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DocVault v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = DatabasePool::connect(&config.database).await?.into_pool();

    docvault_store::postgres::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize stores ────────────────────────────────
    let folder_store: Arc<dyn FolderStore> = Arc::new(PgFolderStore::new(db_pool.clone()));
    let document_store: Arc<dyn DocumentStore> = Arc::new(PgDocumentStore::new(db_pool.clone()));

    // ── Step 3: Initialize services ──────────────────────────────
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&folder_store),
        Arc::clone(&document_store),
    ));
    let document_service = Arc::new(DocumentService::new(
        Arc::clone(&document_store),
        Arc::clone(&folder_store),
    ));
    let tree_service = Arc::new(TreeService::new(
        Arc::clone(&folder_store),
        Arc::clone(&document_store),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = docvault_api::state::AppState {
        config: Arc::new(config.clone()),
        folder_service,
        document_service,
        tree_service,
    };

    let app = docvault_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("DocVault server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("DocVault server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
