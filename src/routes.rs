//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten` - Create a short link
//! - `GET  /health`      - Health check
//! - `GET  /{code}`      - Short link redirect

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
