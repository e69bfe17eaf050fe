//! MovieHub Web - HTMX front end and JSON API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Server-rendered pages driven by a single view controller. The browser
//! posts keystrokes and polls small HTML partials; all search, debounce and
//! trending logic stays in the controller.

pub mod components;
pub mod handlers;
pub mod server;
pub mod static_files;
pub mod templates;

// Re-export main types
pub use server::{AppState, build_router, run_server};
