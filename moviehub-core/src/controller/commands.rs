//! Command definitions for the view controller actor.

use tokio::sync::oneshot;

use crate::catalog::CatalogError;
use crate::trending::TrendingError;
use crate::types::{Movie, TrendingEntry, ViewState};

/// Commands that can be sent to the view controller actor.
///
/// User-facing commands arrive through [`ViewControllerHandle`](super::ViewControllerHandle);
/// lane completions are posted back by the tasks the controller spawns.
#[derive(Debug)]
pub enum ViewCommand {
    /// Application mounted: start the initial search and the trending lane.
    Mount,
    /// Search box text changed.
    EditQuery { query: String },
    /// Snapshot the current view state.
    GetState {
        responder: oneshot::Sender<ViewState>,
    },
    /// Shutdown the controller actor gracefully.
    Shutdown { responder: oneshot::Sender<()> },
    /// A catalog fetch finished.
    SearchResolved {
        sequence: u64,
        query: String,
        outcome: Result<Vec<Movie>, CatalogError>,
    },
    /// The trending list load finished.
    TrendingResolved {
        outcome: Result<Vec<TrendingEntry>, TrendingError>,
    },
}
