//! API route handlers and router assembly.

pub mod auth;

use crate::config::Config;
use crate::middleware::security_headers;
use crate::models::HealthResponse;
use crate::storage::nonce::NonceStore;
use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NonceStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// State with an empty challenge store.
    pub fn new(config: Config) -> Self {
        AppState {
            store: Arc::new(NonceStore::new()),
            config: Arc::new(config),
        }
    }
}

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/nonce", post(auth::issue_nonce))
        .route("/api/verify-signature", post(auth::verify_signature))
        .route("/api/health", get(health))
}

/// Full application: API routes, static UI fallback and HTTP layers.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let max_body_bytes = state.config.max_body_bytes;

    // CorsLayer::new() allows no origins: the UI is served from this same origin.
    api_router()
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::new())
        .layer(axum::middleware::from_fn(security_headers))
        .with_state(state)
}

/// GET /api/health — Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
