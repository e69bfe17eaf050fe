//! Centralized configuration for MovieHub.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

use crate::trending::DEFAULT_TRENDING_LIMIT;

/// Central configuration for all MovieHub components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MovieHubConfig {
    pub tmdb: TmdbConfig,
    pub trending: TrendingConfig,
    pub controller: ControllerConfig,
    pub web: WebConfig,
}

/// Movie metadata API configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Bearer token; `None` is sent as an empty token and rejected upstream
    pub api_key: Option<String>,
    /// Prefix joined with `poster_path` to build poster URLs
    pub image_base_url: String,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: None,
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            user_agent: "moviehub/0.1.0",
        }
    }
}

/// Trending datastore configuration.
///
/// When no Appwrite project is configured the in-memory store is used.
#[derive(Debug, Clone)]
pub struct TrendingConfig {
    /// Number of entries returned by the trending list
    pub limit: usize,
    pub appwrite: AppwriteConfig,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TRENDING_LIMIT,
            appwrite: AppwriteConfig::default(),
        }
    }
}

/// Appwrite backend-as-a-service connection settings.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: Option<String>,
    pub database_id: Option<String>,
    pub collection_id: Option<String>,
    /// Server API key; browser-style sessions work without one
    pub api_key: Option<String>,
}

impl Default for AppwriteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://cloud.appwrite.io/v1".to_string(),
            project_id: None,
            database_id: None,
            collection_id: None,
            api_key: None,
        }
    }
}

impl AppwriteConfig {
    /// Returns `(project, database, collection)` when all three are set.
    pub fn collection_path(&self) -> Option<(&str, &str, &str)> {
        match (&self.project_id, &self.database_id, &self.collection_id) {
            (Some(project), Some(database), Some(collection)) => {
                Some((project.as_str(), database.as_str(), collection.as_str()))
            }
            _ => None,
        }
    }
}

/// View state controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Quiet period before typed text becomes the committed query
    pub debounce: Duration,
    /// Capacity of the controller command channel
    pub command_buffer: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            command_buffer: 100,
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Interval at which the page polls the movie and trending partials
    pub poll_interval: Duration,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            poll_interval: Duration::from_millis(750),
        }
    }
}

impl MovieHubConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults. Unparseable numbers are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Metadata API overrides
        if let Some(api_key) = env_string("MOVIEHUB_TMDB_API_KEY") {
            config.tmdb.api_key = Some(api_key);
        }

        if let Some(base_url) = env_string("MOVIEHUB_TMDB_BASE_URL") {
            config.tmdb.base_url = base_url.trim_end_matches('/').to_string();
        }

        // Trending datastore overrides
        if let Some(endpoint) = env_string("MOVIEHUB_APPWRITE_ENDPOINT") {
            config.trending.appwrite.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        config.trending.appwrite.project_id = env_string("MOVIEHUB_APPWRITE_PROJECT_ID");
        config.trending.appwrite.database_id = env_string("MOVIEHUB_APPWRITE_DATABASE_ID");
        config.trending.appwrite.collection_id = env_string("MOVIEHUB_APPWRITE_COLLECTION_ID");
        config.trending.appwrite.api_key = env_string("MOVIEHUB_APPWRITE_API_KEY");

        if let Ok(limit) = std::env::var("MOVIEHUB_TRENDING_LIMIT") {
            if let Ok(count) = limit.parse::<usize>() {
                config.trending.limit = count;
            }
        }

        // Controller overrides
        if let Ok(debounce) = std::env::var("MOVIEHUB_DEBOUNCE_MS") {
            if let Ok(millis) = debounce.parse::<u64>() {
                config.controller.debounce = Duration::from_millis(millis);
            }
        }

        config
    }

    /// Creates a configuration optimized for testing.
    pub fn for_testing() -> Self {
        Self {
            controller: ControllerConfig {
                debounce: Duration::from_millis(50),
                command_buffer: 16,
            },
            ..Default::default()
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
