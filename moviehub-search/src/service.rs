//! Collaborator wiring by runtime mode.

use std::sync::Arc;
use std::time::Duration;

use moviehub_core::{MovieCatalog, MovieHubConfig, RuntimeMode, TrendingStore};

use crate::catalog::{DemoCatalog, TmdbCatalog};
use crate::trending::{AppwriteTrendingStore, InMemoryTrendingStore};

/// Artificial answer delay of the demo catalog, long enough to show the spinner.
pub const DEMO_LATENCY: Duration = Duration::from_millis(300);

/// Catalog and trending store chosen for one runtime mode.
#[derive(Debug, Clone)]
pub struct MovieHubServices {
    /// Movie listing source.
    pub catalog: Arc<dyn MovieCatalog>,
    /// Search-frequency store.
    pub trending: Arc<dyn TrendingStore>,
}

impl MovieHubServices {
    /// Builds the collaborators for `mode`.
    ///
    /// Development mode uses the offline demo catalog and an in-memory
    /// trending store. Production mode talks to TMDB and, when a collection
    /// is configured, to Appwrite; without one it falls back to the
    /// in-memory store.
    pub fn from_runtime_mode(config: &MovieHubConfig, mode: RuntimeMode) -> Self {
        let image_base_url = config.tmdb.image_base_url.clone();
        let limit = config.trending.limit;

        match mode {
            RuntimeMode::Development => {
                tracing::info!("Using demo catalog and in-memory trending store");
                Self {
                    catalog: Arc::new(DemoCatalog::new().with_latency(DEMO_LATENCY)),
                    trending: Arc::new(InMemoryTrendingStore::new(limit, image_base_url)),
                }
            }
            RuntimeMode::Production => {
                if config.tmdb.api_key.is_none() {
                    tracing::warn!(
                        "MOVIEHUB_TMDB_API_KEY is not set; catalog requests will be rejected"
                    );
                }

                let trending: Arc<dyn TrendingStore> = match AppwriteTrendingStore::from_config(
                    &config.trending.appwrite,
                    image_base_url.clone(),
                    limit,
                ) {
                    Some(store) => Arc::new(store),
                    None => {
                        tracing::warn!(
                            "Appwrite collection not configured; trending counts are kept in memory"
                        );
                        Arc::new(InMemoryTrendingStore::new(limit, image_base_url))
                    }
                };

                Self {
                    catalog: Arc::new(TmdbCatalog::new(config.tmdb.clone())),
                    trending,
                }
            }
        }
    }
}
