//! HTTP router.
//!
//! Returns a composable `Router` with all page and API routes.

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::web::handlers;
use crate::web::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page))
        .route("/ingest", post(handlers::ingest))
        .route("/analyze", post(handlers::analyze))
        .route("/cancel", post(handlers::cancel))
        .route("/api/report", get(handlers::report))
        .route("/health", get(handlers::health))
        .with_state(state)
        // Pages are per-session and change on every render.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}
