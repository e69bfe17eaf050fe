//! Debounce timer
//!
//! Collapses bursts of rapidly changing values into a single settled value
//! once the input has been quiet for a full period. Every new value cancels
//! the pending settlement and restarts the wait, so a burst produces exactly
//! one output: its last value.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

/// Input side of a debounce timer.
///
/// Cloning yields another input into the same timer. The timer task stops
/// once every `Debouncer` is dropped or the settled receiver is closed; a
/// value still waiting out its quiet period at that point is discarded.
#[derive(Debug)]
pub struct Debouncer<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Feeds a new raw value, restarting the quiet period.
    ///
    /// Returns `false` when the timer task has stopped.
    pub fn push(&self, value: T) -> bool {
        self.sender.send(value).is_ok()
    }
}

/// Spawns a debounce timer task and returns its input handle and the
/// receiver of settled values.
///
/// Must be called from within a tokio runtime.
pub fn spawn_debouncer<T: Send + 'static>(
    quiet_period: Duration,
) -> (Debouncer<T>, mpsc::UnboundedReceiver<T>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (settled_tx, settled_rx) = mpsc::unbounded_channel();

    tokio::spawn(run_debounce_loop(quiet_period, input_rx, settled_tx));

    (Debouncer { sender: input_tx }, settled_rx)
}

async fn run_debounce_loop<T>(
    quiet_period: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    settled: mpsc::UnboundedSender<T>,
) {
    let mut pending: Option<T> = None;
    let timer = sleep(quiet_period);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            received = input.recv() => match received {
                Some(value) => {
                    pending = Some(value);
                    timer.as_mut().reset(Instant::now() + quiet_period);
                }
                None => break,
            },
            () = &mut timer, if pending.is_some() => {
                if let Some(value) = pending.take() {
                    if settled.send(value).is_err() {
                        break;
                    }
                }
            }
        }
    }

    tracing::trace!("Debounce timer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const QUIET: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_burst_settles_once_with_last_value() {
        let (debouncer, mut settled) = spawn_debouncer(QUIET);

        for (i, text) in ["b", "ba", "bat", "batm", "batman"].into_iter().enumerate() {
            assert!(debouncer.push(text.to_string()));
            if i < 4 {
                advance(Duration::from_millis(100)).await;
            }
        }

        assert_eq!(settled.recv().await.as_deref(), Some("batman"));

        // Nothing else settles afterwards.
        advance(QUIET * 4).await;
        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_value_waits_for_full_quiet_period() {
        let (debouncer, mut settled) = spawn_debouncer(QUIET);
        let started = Instant::now();

        debouncer.push(1u32);
        advance(Duration::from_millis(400)).await;
        debouncer.push(2u32);

        assert_eq!(settled.recv().await, Some(2));
        assert!(started.elapsed() >= Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_settle_separately() {
        let (debouncer, mut settled) = spawn_debouncer(QUIET);

        debouncer.push("bat");
        assert_eq!(settled.recv().await, Some("bat"));

        debouncer.push("batman");
        debouncer.push("batman begins");
        assert_eq!(settled.recv().await, Some("batman begins"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_timer_emits_nothing() {
        let (_debouncer, mut settled) = spawn_debouncer::<String>(QUIET);

        advance(QUIET * 3).await;
        tokio::task::yield_now().await;

        assert!(settled.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_inputs_stops_timer() {
        let (debouncer, mut settled) = spawn_debouncer::<u8>(QUIET);
        drop(debouncer);

        assert_eq!(settled.recv().await, None);
    }
}
