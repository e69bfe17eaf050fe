//! Handle for communicating with the view controller actor.

use tokio::sync::{mpsc, oneshot};

use super::ControllerError;
use super::commands::ViewCommand;
use crate::types::ViewState;

/// Handle for communicating with the view controller actor.
///
/// Cheap to clone; every clone talks to the same controller.
#[derive(Debug, Clone)]
pub struct ViewControllerHandle {
    sender: mpsc::Sender<ViewCommand>,
}

impl ViewControllerHandle {
    /// Creates a new handle with the given command sender.
    pub fn new(sender: mpsc::Sender<ViewCommand>) -> Self {
        Self { sender }
    }

    /// Mounts the view: loads the default listing and the trending list.
    ///
    /// # Errors
    /// - `ControllerError::Shutdown` - Controller actor is not running
    pub async fn mount(&self) -> Result<(), ControllerError> {
        self.send(ViewCommand::Mount).await
    }

    /// Updates the search box text.
    ///
    /// The query is committed, and a search issued, once typing has paused
    /// for the configured debounce period.
    ///
    /// # Errors
    /// - `ControllerError::Shutdown` - Controller actor is not running
    pub async fn edit_query(&self, query: impl Into<String>) -> Result<(), ControllerError> {
        self.send(ViewCommand::EditQuery {
            query: query.into(),
        })
        .await
    }

    /// Returns a snapshot of the current view state.
    ///
    /// # Errors
    /// - `ControllerError::Shutdown` - Controller actor is not running
    pub async fn state(&self) -> Result<ViewState, ControllerError> {
        let (responder, rx) = oneshot::channel();
        self.send(ViewCommand::GetState { responder }).await?;

        rx.await.map_err(|_| ControllerError::Shutdown)
    }

    /// Stops the controller actor and waits for confirmation.
    ///
    /// After this call every operation returns `ControllerError::Shutdown`.
    ///
    /// # Errors
    /// - `ControllerError::Shutdown` - Controller actor was already stopped
    pub async fn shutdown(&self) -> Result<(), ControllerError> {
        let (responder, rx) = oneshot::channel();
        self.send(ViewCommand::Shutdown { responder }).await?;

        rx.await.map_err(|_| ControllerError::Shutdown)
    }

    async fn send(&self, command: ViewCommand) -> Result<(), ControllerError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| ControllerError::Shutdown)
    }
}
