//! Reusable HTML components for the HTMX UI
//!
//! Components are server-rendered HTML fragments used both in the full page
//! and in the polled partials. Every piece of user or catalog text passes
//! through [`layout::escape_html`] before it reaches the markup.

pub mod layout;
pub mod movie;

// Re-export main component functions
pub use layout::{escape_html, hero_header, search_box, spinner};
pub use movie::{all_movies_section, movie_card, trending_section};
