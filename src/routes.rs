//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`  - Create a short URL
//! - `GET  /`         - Landing page (empty short code is not an error)
//! - `GET  /{*code}`  - Short code resolution (wildcard: the whole remaining
//!   path is the code)
//! - anything else    - 405 with a generic JSON error body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    landing_handler, method_not_allowed_handler, resolve_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the route table with all handlers attached.
///
/// Kept separate from [`app_router`] so tests can drive the dispatch logic
/// without the outer middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/", get(landing_handler))
        .route("/{*code}", get(resolve_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
}

/// Constructs the application router with routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = router(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
