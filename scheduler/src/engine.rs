//! Polling scheduler.
//!
//! Every subscription runs in its own task:
//!
//! ```text
//! interval tick → Pipeline::tick → ViewState (watch channel) → renderer
//! ```
//!
//! The first tick fires immediately. Ticks that fall behind are skipped, not
//! queued, so one series never has two fetches in flight. A failed tick
//! publishes `Failed` with the last good record and the loop keeps going.

use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{Instrument, debug, info, warn};

use common::logger::{TraceId, annotate_span, subscription_span, warn_if_slow};
use market::ViewState;

use crate::counters::Counters;
use crate::pipeline::Pipeline;
use crate::state::SubscriptionHandle;
use crate::types::{Cadence, SchedulerConfig, SubscriptionKey};

/// Ticks slower than this are reported under the `performance` target.
const SLOW_TICK: Duration = Duration::from_secs(3);

pub struct PollingScheduler {
    cfg: SchedulerConfig,
    counters: Counters,
    subscriptions: Mutex<HashMap<SubscriptionKey, SubscriptionHandle>>,
}

impl PollingScheduler {
    pub fn new(cfg: SchedulerConfig) -> Self {
        Self {
            cfg,
            counters: Counters::default(),
            subscriptions: Mutex::new(HashMap::new()),
        }
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Starts polling `key` at the cadence configured for its view.
    ///
    /// An existing subscription on the same key is cancelled first, so a
    /// series never has two tasks feeding it.
    pub async fn subscribe<P: Pipeline>(
        &self,
        key: SubscriptionKey,
        pipeline: P,
    ) -> watch::Receiver<ViewState<P::Output>> {
        let cadence = self.cfg.cadence_for(key.view);
        self.subscribe_with(key, cadence, pipeline).await
    }

    pub async fn subscribe_with<P: Pipeline>(
        &self,
        key: SubscriptionKey,
        cadence: Cadence,
        pipeline: P,
    ) -> watch::Receiver<ViewState<P::Output>> {
        let mut subs = self.subscriptions.lock().await;
        prune_finished(&mut subs);

        if let Some(previous) = subs.remove(&key) {
            debug!(key = %key, "replacing existing subscription");
            previous.cancel().await;
        }

        let (tx, rx) = watch::channel(ViewState::Loading);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let id = TraceId::new();
        let span = subscription_span("poll", &id);
        annotate_span(&span, &key.symbol, Some(key.view.as_str()));

        let task = tokio::spawn(
            run_subscription(cadence, pipeline, tx, shutdown_rx, self.counters.clone())
                .instrument(span),
        );

        info!(key = %key, trace_id = %id, ?cadence, "subscription started");
        subs.insert(key, SubscriptionHandle::new(id, shutdown_tx, task));

        rx
    }

    /// Stops the series. Returns `false` when nothing was subscribed.
    pub async fn unsubscribe(&self, key: &SubscriptionKey) -> bool {
        let handle = {
            let mut subs = self.subscriptions.lock().await;
            prune_finished(&mut subs);
            subs.remove(key)
        };

        match handle {
            Some(h) => {
                h.cancel().await;
                info!(key = %key, "subscription cancelled");
                true
            }
            None => false,
        }
    }

    /// Only live series count; a subscription whose task has exited is
    /// dropped from the table here.
    pub async fn is_subscribed(&self, key: &SubscriptionKey) -> bool {
        let mut subs = self.subscriptions.lock().await;
        prune_finished(&mut subs);
        subs.contains_key(key)
    }

    pub async fn active(&self) -> Vec<SubscriptionKey> {
        let mut subs = self.subscriptions.lock().await;
        prune_finished(&mut subs);
        subs.keys().cloned().collect()
    }

    /// Cancels every subscription and waits for all tasks to exit.
    pub async fn shutdown(&self) {
        let handles: Vec<_> = self.subscriptions.lock().await.drain().collect();
        let count = handles.len();

        futures::future::join_all(handles.into_iter().map(|(_, h)| h.cancel())).await;

        info!(subscriptions = count, "scheduler shut down");
    }
}

fn prune_finished(subs: &mut HashMap<SubscriptionKey, SubscriptionHandle>) {
    subs.retain(|key, handle| {
        let live = !handle.is_finished();
        if !live {
            debug!(key = %key, trace_id = %handle.id, "removing finished subscription");
        }
        live
    });
}

async fn run_subscription<P: Pipeline>(
    cadence: Cadence,
    mut pipeline: P,
    tx: watch::Sender<ViewState<P::Output>>,
    mut shutdown: watch::Receiver<bool>,
    counters: Counters,
) {
    match cadence {
        Cadence::Once => {
            run_tick(&mut pipeline, &tx, &mut shutdown, &counters).await;
        }
        Cadence::Every(period) => {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.changed() => break,
                    _ = ticker.tick() => {}
                }

                if !run_tick(&mut pipeline, &tx, &mut shutdown, &counters).await {
                    break;
                }

                if tx.is_closed() {
                    debug!("no receivers left; stopping");
                    break;
                }
            }
        }
    }
}

/// Runs one tick and publishes its outcome.
///
/// Returns `false` when the subscription was cancelled while the tick was in
/// flight; nothing is published in that case.
async fn run_tick<P: Pipeline>(
    pipeline: &mut P,
    tx: &watch::Sender<ViewState<P::Output>>,
    shutdown: &mut watch::Receiver<bool>,
    counters: &Counters,
) -> bool {
    let result = tokio::select! {
        biased;
        _ = shutdown.changed() => None,
        r = warn_if_slow("pipeline_tick", SLOW_TICK, pipeline.tick()) => Some(r),
    };

    let Some(result) = result.filter(|_| !*shutdown.borrow()) else {
        counters.results_discarded.fetch_add(1, Ordering::Relaxed);
        debug!("tick discarded after cancellation");
        return false;
    };

    match result {
        Ok(view) => {
            counters.ticks_ok.fetch_add(1, Ordering::Relaxed);
            tx.send_replace(ViewState::Ready(view));
        }
        Err(e) => {
            counters.ticks_failed.fetch_add(1, Ordering::Relaxed);
            warn!(error = %e, "tick failed; keeping last good view");
            tx.send_modify(|state| *state = state.fail(e.to_string()));
        }
    }

    true
}
