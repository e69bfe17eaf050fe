//! Full page handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use super::controller_unavailable;
use crate::components::{all_movies_section, hero_header, trending_section};
use crate::server::AppState;
use crate::templates::base_template;

/// Renders the MovieHub page from the current view state.
///
/// The trending strip and the movie grid poll their partials so results
/// appear without a reload once the debounced search resolves.
///
/// # Errors
/// - `StatusCode::SERVICE_UNAVAILABLE` - View controller is not running
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let view = state
        .controller
        .state()
        .await
        .map_err(controller_unavailable)?;
    let poll = state.poll_interval.as_millis();

    let content = format!(
        r#"{}
        <div id="trending" hx-get="/htmx/trending" hx-trigger="every {poll}ms" hx-swap="innerHTML">
            {}
        </div>
        <section id="all-movies" class="all-movies" hx-get="/htmx/movies" hx-trigger="every {poll}ms" hx-swap="innerHTML">
            {}
        </section>"#,
        hero_header(&view.query),
        trending_section(&view),
        all_movies_section(&view, &state.image_base_url),
    );

    Ok(Html(base_template("MovieHub", &content)))
}
