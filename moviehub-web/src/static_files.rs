//! Embedded static assets for the web UI

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Placeholder poster served for movies without artwork.
///
/// Served under the `.png` name the cards link to; the content type tells
/// the browser it is SVG.
const NO_MOVIE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="750" viewBox="0 0 500 750">
<rect width="500" height="750" fill="#1f2937"/>
<rect x="170" y="290" width="160" height="120" rx="12" fill="none" stroke="#6b7280" stroke-width="10"/>
<circle cx="215" cy="330" r="14" fill="#6b7280"/>
<path d="M180 400 L240 350 L280 385 L300 365 L320 400 Z" fill="#6b7280"/>
<text x="250" y="470" font-family="sans-serif" font-size="28" fill="#9ca3af" text-anchor="middle">No poster</text>
</svg>"##;

/// Serves an embedded asset by file name.
pub async fn static_asset(Path(file): Path<String>) -> Response {
    match file.as_str() {
        "no-movie.png" => (
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            NO_MOVIE_SVG,
        )
            .into_response(),
        _ => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}
