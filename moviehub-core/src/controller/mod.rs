//! View state controller
//!
//! Owns the [`ViewState`](crate::types::ViewState) and drives its two
//! independent lanes: the search lane (debounced query, catalog fetch) and
//! the trending lane (trending list loaded on mount). The controller runs as
//! an actor so every mutation happens on one task without locks; network
//! calls run on spawned tasks and report back through the command channel.

mod actor;
mod commands;
mod handle;
mod state_machine;

use thiserror::Error;

pub use actor::spawn_view_controller;
pub use commands::ViewCommand;
pub use handle::ViewControllerHandle;
pub use state_machine::ViewController;

/// Errors returned by [`ViewControllerHandle`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// The controller actor is no longer running.
    #[error("View controller has shut down")]
    Shutdown,
}
