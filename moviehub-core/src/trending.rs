//! Trending aggregator seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Movie, TrendingEntry};

/// Message shown when the trending list cannot be loaded.
pub const TRENDING_ERROR_MESSAGE: &str = "Error fetching trending movies";

/// Default number of entries in the trending list.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Errors raised by a trending datastore.
#[derive(Debug, Error)]
pub enum TrendingError {
    /// Datastore could not be reached.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// Datastore rejected the operation.
    #[error("Datastore error: {reason}")]
    Backend {
        /// The reason reported by the datastore
        reason: String,
    },

    /// Datastore response could not be decoded.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}

/// Search-frequency store backing the trending list.
#[async_trait]
pub trait TrendingStore: Send + Sync + std::fmt::Debug {
    /// Increments the counter for `query`, creating the record on first use.
    ///
    /// New records remember `top_movie` as the representative result.
    ///
    /// # Errors
    /// - `TrendingError::Network` - Datastore unreachable
    /// - `TrendingError::Backend` - Datastore refused the write
    async fn report_search(&self, query: &str, top_movie: &Movie) -> Result<(), TrendingError>;

    /// Returns the highest-count records, most searched first.
    ///
    /// Records with equal counts keep a stable relative order between calls.
    ///
    /// # Errors
    /// - `TrendingError::Network` - Datastore unreachable
    /// - `TrendingError::Backend` - Datastore refused the read
    /// - `TrendingError::Parse` - Malformed datastore response
    async fn trending(&self) -> Result<Vec<TrendingEntry>, TrendingError>;
}
