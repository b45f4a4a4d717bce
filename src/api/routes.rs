//! Route definitions for the HTTP surface.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::AppState;

/// Build the router.
///
/// Only the service endpoints are registered with axum. Every other path
/// falls through to [`handlers::render_page`], which dispatches it through
/// the shell's own route table.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/v1/health", get(handlers::health_check))
        // Public backend configuration
        .route("/__/firebase/init.json", get(handlers::firebase_init))
        // Pages
        .fallback(handlers::render_page)
        .with_state(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
