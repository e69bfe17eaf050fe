//! JSON API handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use moviehub_core::ViewState;
use serde::Deserialize;

use super::controller_unavailable;
use crate::server::AppState;

/// Body of `POST /api/query`
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Search box text to apply
    pub query: String,
}

/// Current view state as JSON.
///
/// # Errors
/// - `StatusCode::SERVICE_UNAVAILABLE` - View controller is not running
pub async fn api_state(State(state): State<AppState>) -> Result<Json<ViewState>, StatusCode> {
    let view = state
        .controller
        .state()
        .await
        .map_err(controller_unavailable)?;
    Ok(Json(view))
}

/// Applies a search box edit; the search itself happens after the debounce.
///
/// # Errors
/// - `StatusCode::SERVICE_UNAVAILABLE` - View controller is not running
pub async fn api_edit_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<StatusCode, StatusCode> {
    state
        .controller
        .edit_query(request.query)
        .await
        .map_err(controller_unavailable)?;
    Ok(StatusCode::ACCEPTED)
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
