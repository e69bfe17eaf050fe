//! Lane state machine for the view controller.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::commands::ViewCommand;
use crate::catalog::{CatalogError, MovieCatalog};
use crate::debounce::Debouncer;
use crate::trending::{TRENDING_ERROR_MESSAGE, TrendingError, TrendingStore};
use crate::types::{Movie, TrendingEntry, ViewState};

/// Single owner of the view state.
///
/// Each lane goes `idle -> loading -> {success, error} -> idle`. Every search
/// is tagged with a monotonically increasing sequence number and only the
/// response carrying the latest number is applied; superseded responses are
/// dropped whole, including their trending report.
#[derive(Debug)]
pub struct ViewController {
    state: ViewState,
    catalog: Arc<dyn MovieCatalog>,
    trending: Arc<dyn TrendingStore>,
    debouncer: Debouncer<String>,
    completions: mpsc::UnboundedSender<ViewCommand>,
    latest_sequence: u64,
    mounted: bool,
}

impl ViewController {
    /// Creates a controller in the initial idle state.
    ///
    /// Lane completions are posted to `completions`, which the owning actor
    /// must route back into [`ViewController::handle`].
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        trending: Arc<dyn TrendingStore>,
        debouncer: Debouncer<String>,
        completions: mpsc::UnboundedSender<ViewCommand>,
    ) -> Self {
        Self {
            state: ViewState::default(),
            catalog,
            trending,
            debouncer,
            completions,
            latest_sequence: 0,
            mounted: false,
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Sequence number of the most recently issued search.
    pub fn latest_sequence(&self) -> u64 {
        self.latest_sequence
    }

    /// Starts the initial search for the committed query and the trending
    /// lane. Repeated mounts are ignored.
    pub fn mount(&mut self) {
        if self.mounted {
            tracing::debug!("View already mounted, ignoring");
            return;
        }
        self.mounted = true;

        self.start_search();
        self.start_trending();
    }

    /// Records the raw query and feeds it to the debounce timer.
    pub fn edit_query(&mut self, query: String) {
        self.state.query.clone_from(&query);
        if !self.debouncer.push(query) {
            tracing::warn!("Debounce timer stopped, query edit will not settle");
        }
    }

    /// Commits a debounced query, starting a search when it changed.
    pub fn settle_query(&mut self, query: String) {
        if query == self.state.committed_query {
            tracing::trace!("Settled query unchanged: {:?}", query);
            return;
        }

        self.state.committed_query = query;
        self.start_search();
    }

    /// Applies a catalog response, ignoring it unless it answers the latest
    /// search.
    pub fn apply_search(
        &mut self,
        sequence: u64,
        query: String,
        outcome: Result<Vec<Movie>, CatalogError>,
    ) {
        if sequence != self.latest_sequence {
            tracing::debug!(
                "Discarding superseded search #{} for {:?} (latest #{})",
                sequence,
                query,
                self.latest_sequence
            );
            return;
        }

        self.state.is_loading = false;

        match outcome {
            Ok(movies) => {
                tracing::debug!("Search #{} for {:?}: {} movies", sequence, query, movies.len());
                let top_movie = if query.is_empty() {
                    None
                } else {
                    movies.first().cloned()
                };
                self.state.movies = movies;

                if let Some(top_movie) = top_movie {
                    self.report_search(query, top_movie);
                }
            }
            Err(error) => {
                tracing::warn!("Error fetching movies for {:?}: {}", query, error);
                if error.clears_results() {
                    self.state.movies.clear();
                }
                self.state.error_message = Some(error.view_message());
            }
        }
    }

    /// Applies the trending list load.
    pub fn apply_trending(&mut self, outcome: Result<Vec<TrendingEntry>, TrendingError>) {
        self.state.is_trending_loading = false;

        match outcome {
            Ok(entries) => {
                tracing::debug!("Loaded {} trending entries", entries.len());
                self.state.trending_movies = entries;
            }
            Err(error) => {
                tracing::warn!("Error fetching trending movies: {}", error);
                self.state.trending_error_message = Some(TRENDING_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Dispatches a command that does not need a reply.
    ///
    /// `GetState` and `Shutdown` are answered by the actor loop and are
    /// ignored here.
    pub fn handle(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Mount => self.mount(),
            ViewCommand::EditQuery { query } => self.edit_query(query),
            ViewCommand::SearchResolved {
                sequence,
                query,
                outcome,
            } => self.apply_search(sequence, query, outcome),
            ViewCommand::TrendingResolved { outcome } => self.apply_trending(outcome),
            ViewCommand::GetState { .. } | ViewCommand::Shutdown { .. } => {}
        }
    }

    fn start_search(&mut self) {
        self.latest_sequence += 1;
        let sequence = self.latest_sequence;
        let query = self.state.committed_query.clone();

        self.state.is_loading = true;
        self.state.error_message = None;

        tracing::debug!("Starting search #{} for {:?}", sequence, query);

        let catalog = Arc::clone(&self.catalog);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let outcome = catalog.fetch_movies(&query).await;
            let _ = completions.send(ViewCommand::SearchResolved {
                sequence,
                query,
                outcome,
            });
        });
    }

    fn start_trending(&mut self) {
        self.state.is_trending_loading = true;
        self.state.trending_error_message = None;

        let trending = Arc::clone(&self.trending);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let outcome = trending.trending().await;
            let _ = completions.send(ViewCommand::TrendingResolved { outcome });
        });
    }

    /// Fire-and-forget report of a successful search. Failures only reach
    /// the log.
    fn report_search(&self, query: String, top_movie: Movie) {
        let trending = Arc::clone(&self.trending);
        tokio::spawn(async move {
            match trending.report_search(&query, &top_movie).await {
                Ok(()) => tracing::debug!(
                    "Reported search {:?} with top movie {}",
                    query,
                    top_movie.id
                ),
                Err(error) => tracing::warn!("Failed to report search {:?}: {}", query, error),
            }
        });
    }
}
