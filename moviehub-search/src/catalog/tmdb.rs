//! Movie listings from The Movie Database (TMDB) HTTP API.

use async_trait::async_trait;
use moviehub_core::config::TmdbConfig;
use moviehub_core::{CatalogError, Movie, MovieCatalog};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;

/// TMDB-backed movie catalog.
///
/// The bearer token comes from the [`TmdbConfig`] given at construction. A
/// missing token is still sent (empty) so the API answers with an
/// authorization failure instead of the client refusing locally.
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    client: reqwest::Client,
    config: TmdbConfig,
}

/// Listing envelope returned by the catalog.
///
/// Besides `results`, two failure conventions are recognised: the
/// `response: "False"` / `Error` pair (either capitalisation of the flag)
/// and TMDB's `success: false` / `status_message` pair.
#[derive(Debug, Clone, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Option<Vec<Movie>>,
    #[serde(rename = "Response", alias = "response", default)]
    response: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status_message: Option<String>,
}

impl ListingResponse {
    fn into_movies(self) -> Result<Vec<Movie>, CatalogError> {
        let flagged = self.response.as_deref() == Some("False") || self.success == Some(false);
        if flagged {
            return Err(CatalogError::Rejected {
                message: self
                    .error
                    .or(self.status_message)
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        Ok(self.results.unwrap_or_default())
    }
}

/// Builds the request URL for `query`.
///
/// An empty query selects the popularity-sorted discovery listing; any other
/// query is percent-encoded into a title search.
pub fn endpoint_for(base_url: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{base_url}/discover/movie?sort_by=popularity.desc")
    } else {
        format!(
            "{base_url}/search/movie?query={}",
            urlencoding::encode(query)
        )
    }
}

impl TmdbCatalog {
    /// Create a catalog client from explicit configuration.
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let url = endpoint_for(&self.config.base_url, query);
        tracing::debug!("Fetching movies from {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.config.api_key.as_deref().unwrap_or_default())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.config.user_agent)
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Catalog answered {} for {}", status, url);
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let listing: ListingResponse =
            response.json().await.map_err(|e| CatalogError::Parse {
                reason: format!("JSON parsing failed: {e}"),
            })?;

        listing.into_movies()
    }
}
