//! MovieHub Core - View state and collaborator seams
//!
//! This crate holds everything the movie discovery client needs that is not
//! tied to a particular transport: configuration, domain types, the catalog
//! and trending-store traits, the debounce timer and the view state controller
//! that orchestrates them.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod mode;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_mocks;
pub mod tracing_setup;
pub mod trending;
pub mod types;

// Re-export main types for convenient access
pub use catalog::{CatalogError, MovieCatalog};
pub use config::MovieHubConfig;
pub use controller::{ControllerError, ViewControllerHandle, spawn_view_controller};
pub use debounce::{Debouncer, spawn_debouncer};
pub use mode::RuntimeMode;
pub use trending::{TrendingError, TrendingStore};
pub use types::{Movie, SearchRecord, TrendingEntry, ViewState};

/// Errors that can bubble up from any MovieHub subsystem.
///
/// High-level error types representing failures in core functionality.
#[derive(Debug, thiserror::Error)]
pub enum MovieHubError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Trending error: {0}")]
    Trending(#[from] TrendingError),

    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MovieHubError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MovieHubError::Catalog(CatalogError::Rejected { message }) => message.clone(),
            MovieHubError::Catalog(_) => catalog::FETCH_ERROR_MESSAGE.to_string(),
            MovieHubError::Trending(_) => trending::TRENDING_ERROR_MESSAGE.to_string(),
            MovieHubError::Controller(_) => "The view is no longer running".to_string(),
            MovieHubError::Configuration { reason } => format!("Configuration error: {reason}"),
            MovieHubError::Io(_) => "File system error occurred".to_string(),
        }
    }
}
