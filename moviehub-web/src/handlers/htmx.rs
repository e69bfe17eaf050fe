//! HTMX handlers for keystrokes and polled partials

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use super::controller_unavailable;
use crate::components::{all_movies_section, trending_section};
use crate::server::AppState;

/// Form data posted by the search box
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    /// Current search box text
    #[serde(default)]
    pub query: String,
}

/// Forwards the search box text to the controller.
///
/// # Errors
/// - `StatusCode::SERVICE_UNAVAILABLE` - View controller is not running
pub async fn edit_query(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> Result<StatusCode, StatusCode> {
    state
        .controller
        .edit_query(form.query)
        .await
        .map_err(controller_unavailable)?;
    Ok(StatusCode::NO_CONTENT)
}

/// "All Movies" section fragment.
///
/// # Errors
/// - `StatusCode::SERVICE_UNAVAILABLE` - View controller is not running
pub async fn movies_partial(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let view = state
        .controller
        .state()
        .await
        .map_err(controller_unavailable)?;
    Ok(Html(all_movies_section(&view, &state.image_base_url)))
}

/// Trending strip fragment; empty while there is nothing trending.
///
/// # Errors
/// - `StatusCode::SERVICE_UNAVAILABLE` - View controller is not running
pub async fn trending_partial(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let view = state
        .controller
        .state()
        .await
        .map_err(controller_unavailable)?;
    Ok(Html(trending_section(&view)))
}
