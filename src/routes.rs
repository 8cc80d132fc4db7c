//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /`                 - Create a short URL
//! - `GET    /health`           - Health check
//! - `GET    /urls`             - List all stored URLs
//! - `PUT    /urls/{short_id}`  - Replace a stored URL record
//! - `DELETE /urls/{short_id}`  - Delete a stored URL record
//! - `GET    /{short_id}`       - Short URL redirect
//!
//! Static segments win over the `/{short_id}` capture, so `/health` and
//! `/urls` are never treated as short ids.
//!
//! # Middleware
//!
//! - **Tracing** - span per request, response event with status and latency
//! - **Path normalization** - trailing slashes are trimmed before routing

use crate::api::handlers::{
    delete_url_handler, health_handler, list_urls_handler, redirect_handler, shorten_handler,
    update_url_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the full application router, wrapped in path normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{short_id}",
            put(update_url_handler).delete(delete_url_handler),
        )
        .route("/{short_id}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
