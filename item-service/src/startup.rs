//! Application startup and lifecycle management.

use crate::config::{ItemConfig, StoreBackend};
use crate::handlers;
use crate::services::{ItemStore, MemoryItemStore, MongoDb};
use axum::{
    middleware,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

/// Open the configured store. For MongoDB this connects, pings and ensures
/// indexes; any failure is returned to the caller.
pub async fn connect_store(config: &ItemConfig) -> Result<Arc<dyn ItemStore>, AppError> {
    match config.store {
        StoreBackend::Mongo => {
            let db = MongoDb::connect(&config.mongodb).await.map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
            db.initialize_indexes().await.map_err(|e| {
                tracing::error!("Failed to initialize database indexes: {}", e);
                e
            })?;
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory item store; data is not persisted");
            Ok(Arc::new(MemoryItemStore::new()))
        }
    }
}

/// Build the HTTP router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::service_description))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:id",
            get(handlers::get_item).delete(handlers::delete_item),
        )
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ItemConfig) -> Result<Self, AppError> {
        let store = connect_store(&config).await?;

        let state = AppState { store };

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Item service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> Arc<dyn ItemStore> {
        self.state.store.clone()
    }

    /// Serve until a shutdown signal arrives, then close the store.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(shutdown_signal()).await
    }

    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let store = self.state.store.clone();
        let app = router(self.state);

        let result = axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        if let Err(e) = &result {
            tracing::error!("HTTP server error: {}", e);
        }

        store.shutdown().await;
        tracing::info!("Item service stopped");
        result
    }
}
