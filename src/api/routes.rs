//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, home, info, ready};

/// Create the API router.
///
/// Four fixed routes; anything else falls through to axum's default 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home))
        // Probe endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/info", get(info))
        .layer(TraceLayer::new_for_http())
}
