//! Movie metadata catalog seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Movie;

/// Message shown for every catalog failure that is not a domain rejection.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching movies";

/// Errors that can occur while fetching movies from a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request could not be sent or the connection failed.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Catalog answered with a non-success HTTP status.
    #[error("Catalog returned HTTP {status}")]
    Status {
        /// HTTP status code received
        status: u16,
    },

    /// Response body was not the expected JSON.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// Catalog answered successfully but flagged the request as failed.
    #[error("Catalog rejected request: {message}")]
    Rejected {
        /// Failure text supplied by the catalog
        message: String,
    },
}

impl CatalogError {
    /// Text stored in the view for this failure.
    ///
    /// Domain rejections carry their own text; every other failure collapses
    /// into [`FETCH_ERROR_MESSAGE`].
    pub fn view_message(&self) -> String {
        match self {
            CatalogError::Rejected { message } => message.clone(),
            _ => FETCH_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the catalog asked for the result list to be cleared.
    pub fn clears_results(&self) -> bool {
        matches!(self, CatalogError::Rejected { .. })
    }
}

/// Source of movie listings.
///
/// Implementations provide movie lookups through different backends
/// (the TMDB HTTP API, offline demo data, mocks for testing).
#[async_trait]
pub trait MovieCatalog: Send + Sync + std::fmt::Debug {
    /// Fetches a listing for `query`.
    ///
    /// An empty query requests the default popularity-sorted discovery
    /// listing; anything else is a title search.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Transport failure
    /// - `CatalogError::Status` - Non-success HTTP status
    /// - `CatalogError::Parse` - Malformed response body
    /// - `CatalogError::Rejected` - Catalog-signalled failure
    async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_message_collapses_transport_failures() {
        let failures = [
            CatalogError::Network {
                reason: "dns".to_string(),
            },
            CatalogError::Status { status: 401 },
            CatalogError::Parse {
                reason: "eof".to_string(),
            },
        ];
        for failure in failures {
            assert_eq!(failure.view_message(), FETCH_ERROR_MESSAGE);
            assert!(!failure.clears_results());
        }
    }

    #[test]
    fn test_rejection_keeps_catalog_text() {
        let failure = CatalogError::Rejected {
            message: "Too many results.".to_string(),
        };
        assert_eq!(failure.view_message(), "Too many results.");
        assert!(failure.clears_results());
    }
}
