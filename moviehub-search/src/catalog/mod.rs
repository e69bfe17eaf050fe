//! Movie catalog implementations.

pub mod demo;
pub mod tmdb;

pub use demo::DemoCatalog;
pub use tmdb::{TmdbCatalog, endpoint_for};
