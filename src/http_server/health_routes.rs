//! Health HTTP Routes
//!
//! Liveness probes and the root banner.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::errors::ApiResult;
use super::joke_routes::JokesState;

/// Plain-text help served at `/`
pub const BANNER: &str = "Try /random_joke, /random_ten, /jokes/random, or /jokes/ten";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub jokes: usize,
}

/// Create health routes
pub fn health_routes(state: Arc<JokesState>) -> Router {
    Router::new()
        .route("/", get(banner_handler))
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn banner_handler() -> &'static str {
    BANNER
}

async fn ping_handler() -> &'static str {
    "pong"
}

/// Health check handler
async fn health_handler(State(state): State<Arc<JokesState>>) -> ApiResult<impl IntoResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        jokes: state.read()?.len(),
    };

    Ok((StatusCode::OK, Json(response)))
}
