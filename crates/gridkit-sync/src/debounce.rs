//! Single-slot debouncer.
//!
//! Every call waits out the quiet window. Only a call that is still the most
//! recent one when its window elapses runs its operation, and only a call that
//! is still the most recent one when the operation finishes observes the
//! result. All other calls resolve to [`Debounced::Superseded`].

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Outcome of a debounced call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Debounced<T> {
    /// This call was the last one and its operation finished
    Completed(T),
    /// A later call replaced this one
    Superseded,
}

impl<T> Debounced<T> {
    pub fn is_superseded(&self) -> bool {
        matches!(self, Debounced::Superseded)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Debounced::Completed(value) => Some(value),
            Debounced::Superseded => None,
        }
    }
}

/// Coalesces bursts of calls into the last one
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: AtomicU64::new(0),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `operation` after the quiet window.
    ///
    /// The operation is constructed only if this call survives the window.
    pub async fn run<F, Fut, T>(&self, operation: F) -> Debounced<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.window).await;
        if !self.is_latest(ticket) {
            tracing::debug!("Debounced call {} superseded before running", ticket);
            return Debounced::Superseded;
        }

        let output = operation().await;
        if !self.is_latest(ticket) {
            tracing::debug!("Debounced call {} superseded while in flight", ticket);
            return Debounced::Superseded;
        }

        Debounced::Completed(output)
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}
