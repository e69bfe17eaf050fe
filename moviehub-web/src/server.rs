//! HTMX web server for MovieHub
//!
//! Serves the page, its polled partials and a small JSON API, all backed by
//! one view controller per server process.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use moviehub_core::config::MovieHubConfig;
use moviehub_core::{MovieHubError, RuntimeMode, ViewControllerHandle, spawn_view_controller};
use moviehub_search::MovieHubServices;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    api_edit_query, api_state, edit_query, health, home_page, movies_partial, trending_partial,
};
use crate::static_files::static_asset;

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the view controller backing the page
    pub controller: ViewControllerHandle,
    /// Interval at which the page polls its partials
    pub poll_interval: Duration,
    /// Prefix joined with poster paths when rendering movie cards
    pub image_base_url: Arc<str>,
}

impl AppState {
    /// Creates handler state around an already spawned controller.
    pub fn new(controller: ViewControllerHandle, config: &MovieHubConfig) -> Self {
        Self {
            controller,
            poll_interval: config.web.poll_interval,
            image_base_url: Arc::from(config.tmdb.image_base_url.as_str()),
        }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(home_page))
        // HTMX endpoints
        .route("/htmx/query", post(edit_query))
        .route("/htmx/movies", get(movies_partial))
        .route("/htmx/trending", get(trending_partial))
        // JSON API endpoints
        .route("/api/state", get(api_state))
        .route("/api/query", post(api_edit_query))
        .route("/health", get(health))
        // Static assets
        .route("/static/{file}", get(static_asset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the controller, mounts the view and serves HTTP until Ctrl+C.
///
/// # Errors
/// - `MovieHubError::Io` - Failed to bind or serve on the configured address
/// - `MovieHubError::Controller` - Controller stopped before the view mounted
pub async fn run_server(config: MovieHubConfig, mode: RuntimeMode) -> Result<(), MovieHubError> {
    let services = MovieHubServices::from_runtime_mode(&config, mode);
    let controller = spawn_view_controller(
        config.controller.clone(),
        services.catalog,
        services.trending,
    );
    controller.mount().await?;

    let app = build_router(AppState::new(controller.clone(), &config));

    let address = format!("{}:{}", config.web.host, config.web.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        "MovieHub running on http://{} ({} mode)",
        listener.local_addr()?,
        mode
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = controller.shutdown().await {
        tracing::debug!("Controller already stopped: {}", e);
    }
    tracing::info!("MovieHub stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
