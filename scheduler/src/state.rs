//! Bookkeeping for live subscriptions.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use common::logger::TraceId;

/// Owner side of one running subscription task.
///
/// Dropping the handle without calling [`SubscriptionHandle::cancel`] still
/// stops the task on its next wake-up, because the shutdown sender goes away.
#[derive(Debug)]
pub struct SubscriptionHandle {
    pub id: TraceId,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SubscriptionHandle {
    pub(crate) fn new(id: TraceId, shutdown_tx: watch::Sender<bool>, task: JoinHandle<()>) -> Self {
        Self {
            id,
            shutdown_tx,
            task,
        }
    }

    /// `true` once the task has exited on its own (single-shot cadence, or
    /// every receiver dropped).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signals the task and waits for it to exit.
    ///
    /// Any fetch in flight is abandoned; its result is never published.
    pub async fn cancel(self) {
        let _ = self.shutdown_tx.send(true);

        match self.task.await {
            Ok(()) => debug!(trace_id = %self.id, "subscription stopped"),
            Err(e) if e.is_cancelled() => {}
            Err(e) => debug!(trace_id = %self.id, error = %e, "subscription task ended abnormally"),
        }
    }
}
