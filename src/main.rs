//! Board Shell - routing shell for the board app
//!
//! Serves the app's pages through an explicit route table and wires the
//! Firebase backend handles (app, analytics, database, messaging, auth)
//! that the page components use.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod backend;
mod config;
mod error;
mod logging;
mod router;

use crate::api::build_router;
use crate::backend::{AppRegistry, BackendHandles};
use crate::config::Config;
use crate::router::RouteTable;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The page route table.
    pub routes: Arc<RouteTable>,
    /// Registry owning the initialized backend apps.
    pub registry: Arc<AppRegistry>,
    /// Handles derived from the default app.
    pub backend: BackendHandles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Load configuration; logging is not up yet, so errors go to stderr
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // Initialize logging
    logging::init(&config.logging);

    tracing::info!("Starting Board Shell v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        host = %config.server.host,
        log_format = ?config.logging.format,
        port = %config.server.port,
        project_id = %config.firebase.project_id,
        "Configuration loaded"
    );

    // Initialize the backend. Failure here is fatal.
    let registry = Arc::new(AppRegistry::new());
    let backend = BackendHandles::initialize(&registry, config.firebase.clone()).map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize backend");
        anyhow::anyhow!("Backend initialization error: {}", e)
    })?;

    tracing::info!(
        app = %backend.app.name(),
        auth_domain = %backend.auth.auth_domain(),
        analytics_enabled = backend.analytics.is_enabled(),
        "Backend handles ready"
    );

    // Build the page route table
    let routes = RouteTable::standard()?;
    anyhow::ensure!(!routes.is_empty(), "Route table has no routes");
    for entry in routes.entries() {
        tracing::debug!(pattern = %entry.pattern.as_str(), page = %entry.page, "Route registered");
    }
    tracing::info!(
        routes = routes.len(),
        root = ?routes.root_page(),
        "Route table ready"
    );

    let state = AppState {
        routes: Arc::new(routes),
        registry,
        backend,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
