//! HTTP request handlers.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::api::pages;
use crate::api::types::*;
use crate::backend::FirebaseOptions;
use crate::error::{ShellError, ShellResult};
use crate::router::PageId;
use crate::AppState;

/// Mount the page for the request path.
///
/// GET <any page path>
pub async fn render_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> ShellResult<Response> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ShellError::MethodNotAllowed(method.to_string()));
    }

    let route = state.routes.dispatch(uri.path());

    tracing::info!(
        path = %uri.path(),
        page = %route.page,
        board_id = ?route.board_id(),
        "Mounting page"
    );

    let html = pages::render(&route, &state.backend)
        .map_err(|e| ShellError::Internal(format!("Failed to render page: {e}")))?;

    let status = match route.page {
        PageId::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    Ok((status, Html(html)).into_response())
}

/// Health check endpoint.
///
/// GET /v1/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let analytics = &state.backend.analytics;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        app: state.backend.app.name().to_string(),
        project_id: state.backend.app.options().project_id.clone(),
        analytics: AnalyticsStatus {
            enabled: analytics.is_enabled(),
            measurement_id: analytics.measurement_id().map(str::to_string),
        },
        routes: state.routes.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Public web configuration of the default app, in browser SDK shape.
///
/// GET /__/firebase/init.json
pub async fn firebase_init(State(state): State<AppState>) -> ShellResult<Json<FirebaseOptions>> {
    let app = state.registry.get_app(None)?;
    Ok(Json(app.options().clone()))
}
