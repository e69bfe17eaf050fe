//! Actor implementation for the view controller.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::commands::ViewCommand;
use super::handle::ViewControllerHandle;
use super::state_machine::ViewController;
use crate::catalog::MovieCatalog;
use crate::config::ControllerConfig;
use crate::debounce::spawn_debouncer;
use crate::trending::TrendingStore;

/// Spawns the view controller actor and returns its handle.
///
/// The actor owns the view state and processes commands sequentially. It
/// also listens to its debounce timer and to the completions posted by the
/// lane tasks it spawns. Must be called from within a tokio runtime.
///
/// # Examples
/// ```rust,no_run
/// # #[tokio::main]
/// # async fn main() {
/// use std::sync::Arc;
///
/// use moviehub_core::config::ControllerConfig;
/// use moviehub_core::spawn_view_controller;
/// # use moviehub_core::{MovieCatalog, TrendingStore};
/// # fn collaborators() -> (Arc<dyn MovieCatalog>, Arc<dyn TrendingStore>) { unimplemented!() }
///
/// let (catalog, trending) = collaborators();
/// let handle = spawn_view_controller(ControllerConfig::default(), catalog, trending);
/// handle.mount().await.unwrap();
/// # }
/// ```
pub fn spawn_view_controller(
    config: ControllerConfig,
    catalog: Arc<dyn MovieCatalog>,
    trending: Arc<dyn TrendingStore>,
) -> ViewControllerHandle {
    let (sender, receiver) = mpsc::channel(config.command_buffer);
    let (completion_sender, completion_receiver) = mpsc::unbounded_channel();
    let (debouncer, settled) = spawn_debouncer(config.debounce);
    let controller = ViewController::new(catalog, trending, debouncer, completion_sender);

    tokio::spawn(async move {
        run_actor_loop(controller, receiver, completion_receiver, settled).await;
    });

    ViewControllerHandle::new(sender)
}

/// Runs the main actor message processing loop.
///
/// Processes user commands, lane completions and settled queries one at a
/// time until the handle side is dropped or a shutdown command arrives.
async fn run_actor_loop(
    mut controller: ViewController,
    mut receiver: mpsc::Receiver<ViewCommand>,
    mut completions: mpsc::UnboundedReceiver<ViewCommand>,
    mut settled: mpsc::UnboundedReceiver<String>,
) {
    tracing::debug!("View controller actor started");

    loop {
        tokio::select! {
            command = receiver.recv() => match command {
                Some(command) => {
                    if !handle_command(&mut controller, command) {
                        break;
                    }
                }
                None => break,
            },
            Some(command) = completions.recv() => {
                controller.handle(command);
            }
            Some(query) = settled.recv() => {
                controller.settle_query(query);
            }
        }
    }

    tracing::debug!("View controller actor stopped");
}

/// Handles a single command for the controller.
/// Returns true to continue processing, false to shutdown.
fn handle_command(controller: &mut ViewController, command: ViewCommand) -> bool {
    match command {
        ViewCommand::GetState { responder } => {
            let _ = responder.send(controller.state().clone());
        }

        ViewCommand::Shutdown { responder } => {
            tracing::debug!("View controller actor shutting down");
            let _ = responder.send(());
            return false;
        }

        other => controller.handle(other),
    }
    true
}
