/// Server setup and initialization
///
/// Wires storage, controller and HTTP routes together, then serves them until
/// a shutdown signal arrives.

use crate::{
    api::{create_project_routes, AppState},
    config::{Config, StorageBackend},
    controller::ProjectController,
    shutdown,
    storage::{
        close_pool, connect_pool, DatabaseProjectRepository, MemoryProjectRepository, ProjectRepository,
    },
};
use anyhow::Result;
use axum::{routing::get, Router};
use sqlx::AnyPool;
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Storage backend chosen at startup, plus the pool to close on shutdown
pub struct Storage {
    pub repository: Arc<dyn ProjectRepository>,
    pool: Option<AnyPool>,
}

impl Storage {
    /// Seeded in-memory storage
    pub fn memory() -> Self {
        Self::from_repository(Arc::new(MemoryProjectRepository::seeded()))
    }

    pub fn from_repository(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository, pool: None }
    }

    /// Database storage over `pool`; the pool is closed by [`Storage::close`]
    pub fn database(pool: AnyPool) -> Self {
        Self {
            repository: Arc::new(DatabaseProjectRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Build the backend selected in `config`
    pub async fn from_config(config: &Config) -> Result<Self> {
        match config.storage.backend {
            StorageBackend::Memory => {
                tracing::info!("📋 Using in-memory project storage");
                Ok(Self::memory())
            }
            StorageBackend::Database => {
                tracing::info!("📋 Using database project storage");
                let pool = connect_pool(&config.database).await?;
                Ok(Self::database(pool))
            }
        }
    }

    pub async fn close(self) {
        if let Some(pool) = self.pool {
            close_pool(&pool).await;
        }
    }
}

/// Create the Axum router with all routes
///
/// Every request gets a tracing span with method, path and latency.
pub fn create_router(repository: Arc<dyn ProjectRepository>) -> Router {
    let state = AppState {
        controller: Arc::new(ProjectController::new(repository)),
    };

    Router::new()
        .route("/healthz", get(health_check))
        .merge(create_project_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
}

/// Serve `router` on `listener` until `shutdown` resolves
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

/// Start the HTTP server with the given configuration
///
/// Runs until SIGINT/SIGTERM, then closes the database pool if one is open.
pub async fn start_server(config: Config) -> Result<()> {
    tracing::info!("Starting project service...");

    let storage = Storage::from_config(&config).await?;
    let router = create_router(Arc::clone(&storage.repository));

    let bind_addr = config.server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Server listening on http://{}", bind_addr);

    let result = serve(listener, router, shutdown::wait_for_signal()).await;

    tracing::info!("Shutting down...");
    storage.close().await;

    result
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
