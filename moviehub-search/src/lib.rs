//! MovieHub Search - Catalog and trending datastore clients

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Concrete implementations of the [`MovieCatalog`](moviehub_core::MovieCatalog)
//! and [`TrendingStore`](moviehub_core::TrendingStore) seams: the TMDB HTTP
//! API, an offline demo catalog, the Appwrite document store and an
//! in-memory store for development and tests.

pub mod catalog;
pub mod service;
pub mod trending;

// Re-export main types
pub use catalog::{DemoCatalog, TmdbCatalog};
pub use service::MovieHubServices;
pub use trending::{AppwriteTrendingStore, InMemoryTrendingStore};
