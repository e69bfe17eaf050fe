//! Mock collaborators for testing the view controller.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, MovieCatalog};
use crate::trending::{TrendingError, TrendingStore};
use crate::types::{Movie, TrendingEntry};

/// Builds a movie with a poster path derived from its id.
pub fn sample_movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        vote_average: Some(7.5),
        original_language: Some("en".to_string()),
        release_date: Some("2008-07-16".to_string()),
    }
}

/// Scripted answer of the mock catalog for one query.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Movies(Vec<Movie>),
    Rejected(String),
    Status(u16),
    Network,
}

impl MockOutcome {
    fn to_result(&self) -> Result<Vec<Movie>, CatalogError> {
        match self {
            MockOutcome::Movies(movies) => Ok(movies.clone()),
            MockOutcome::Rejected(message) => Err(CatalogError::Rejected {
                message: message.clone(),
            }),
            MockOutcome::Status(status) => Err(CatalogError::Status { status: *status }),
            MockOutcome::Network => Err(CatalogError::Network {
                reason: "mock connection refused".to_string(),
            }),
        }
    }
}

/// Mock catalog answering from a script and recording every request.
///
/// Unscripted queries answer with an empty listing.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    outcomes: HashMap<String, MockOutcome>,
    delays: HashMap<String, Duration>,
    requests: Arc<RwLock<Vec<String>>>,
}

impl MockCatalog {
    /// Creates a mock catalog with no scripted answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful listing for `query`.
    pub fn with_movies(mut self, query: &str, movies: Vec<Movie>) -> Self {
        self.outcomes
            .insert(query.to_string(), MockOutcome::Movies(movies));
        self
    }

    /// Scripts an arbitrary outcome for `query`.
    pub fn with_outcome(mut self, query: &str, outcome: MockOutcome) -> Self {
        self.outcomes.insert(query.to_string(), outcome);
        self
    }

    /// Delays the answer for `query`.
    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Queries requested so far, in request order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl MovieCatalog for MockCatalog {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        self.requests.write().await.push(query.to_string());

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        match self.outcomes.get(query) {
            Some(outcome) => outcome.to_result(),
            None => Ok(Vec::new()),
        }
    }
}

/// Mock trending store recording reports and serving a fixed list.
#[derive(Debug, Clone, Default)]
pub struct MockTrendingStore {
    entries: Vec<TrendingEntry>,
    fail_reports: bool,
    fail_listing: bool,
    list_delay: Option<Duration>,
    reports: Arc<RwLock<Vec<(String, u64)>>>,
}

impl MockTrendingStore {
    /// Creates an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `entries` from `trending()`.
    pub fn with_entries(mut self, entries: Vec<TrendingEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Makes every `report_search` fail.
    pub fn failing_reports(mut self) -> Self {
        self.fail_reports = true;
        self
    }

    /// Makes every `trending` call fail.
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Delays the answer of `trending()`.
    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    /// Reports received so far as `(query, top movie id)`.
    ///
    /// Failed reports are recorded too.
    pub async fn reports(&self) -> Vec<(String, u64)> {
        self.reports.read().await.clone()
    }
}

#[async_trait]
impl TrendingStore for MockTrendingStore {
    async fn report_search(&self, query: &str, top_movie: &Movie) -> Result<(), TrendingError> {
        self.reports
            .write()
            .await
            .push((query.to_string(), top_movie.id));

        if self.fail_reports {
            return Err(TrendingError::Network {
                reason: "mock datastore offline".to_string(),
            });
        }
        Ok(())
    }

    async fn trending(&self) -> Result<Vec<TrendingEntry>, TrendingError> {
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_listing {
            return Err(TrendingError::Backend {
                reason: "mock listing failure".to_string(),
            });
        }
        Ok(self.entries.clone())
    }
}
