//! Debounced dispatch for the search box.
//!
//! Every keystroke pushes the current text. The pending timer is aborted and
//! restarted on each push, so only the value that survives a full quiet
//! period is delivered.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Holds back values until no new value arrived for `delay`.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer and the receiver that settled values arrive on.
    #[must_use]
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Replaces any pending value with `value` and restarts the timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn push(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver gone means nobody is listening any more
            let _ = tx.send(value);
        }));
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            trace!("debounce timer restarted");
            handle.abort();
        }
    }

    /// Quiet period this debouncer waits for.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
