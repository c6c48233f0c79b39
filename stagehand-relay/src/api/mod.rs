//! API Module
//!
//! HTTP API layer for the relay.
//! Each submodule handles endpoints for a specific domain.

pub mod actors;
pub mod error;
pub mod health;
pub mod runs;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::service::RunDriver;
use stagehand_client::PlatformClient;

/// Shared handler state: the platform client for pass-through calls and the
/// run driver for the orchestrated run endpoint.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<PlatformClient>,
    pub driver: Arc<RunDriver>,
}

/// Create the main API router with all endpoints
///
/// Anything outside `/api` and `/health` falls through to the static UI
/// bundle.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Credential validation
        .route("/api/validate-key", post(actors::validate_key))
        // Actor endpoints
        .route("/api/actors", get(actors::list_actors))
        .route("/api/actors/{id}", get(actors::get_actor))
        .route("/api/actors/{id}/run", post(runs::run_actor))
        .with_state(state)
        // Static UI bundle
        .fallback_service(ServeDir::new(static_dir))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
