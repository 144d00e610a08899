//! HTTP layer - axum router, shared state and server start-up.
//!
//! Handlers delegate to [`crate::core`] and return [`crate::errors::Result`];
//! any error is rendered by `Error`'s `IntoResponse` impl, which acts as the
//! error boundary for the pages.

/// Checkout banner endpoint
pub mod checkout;
/// Vehicle list endpoint
pub mod vehicles;

use crate::config::server::ServerConfig;
use crate::errors::{Error, Result};
use axum::{
    Json, Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// State shared by all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Quiet period advertised to the search box
    pub search_debounce: Duration,
}

impl AppState {
    /// Creates the handler state.
    #[must_use]
    pub const fn new(db: DatabaseConnection, search_debounce: Duration) -> Self {
        Self {
            db,
            search_debounce,
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(vehicles::VEHICLES_PATH, get(vehicles::list_vehicles_page))
        .route(
            "/api/checkout/long-delivery-banner",
            post(checkout::long_delivery_banner),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, db: DatabaseConnection) -> Result<()> {
    let app = router(AppState::new(db, config.search_debounce));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Serve {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
