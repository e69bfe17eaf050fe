//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;
pub mod pages;

use axum::http::StatusCode;
use moviehub_core::ControllerError;

// Re-export handler functions
pub use api::{QueryRequest, api_edit_query, api_state, health};
pub use htmx::{QueryForm, edit_query, movies_partial, trending_partial};
pub use pages::home_page;

/// Maps a stopped controller to `503 Service Unavailable`.
pub(crate) fn controller_unavailable(error: ControllerError) -> StatusCode {
    tracing::warn!("View controller unavailable: {}", error);
    StatusCode::SERVICE_UNAVAILABLE
}
