use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Minimal counters for operational visibility.
#[derive(Clone, Default, Debug)]
pub struct Counters {
    pub ticks_ok: Arc<AtomicU64>,
    pub ticks_failed: Arc<AtomicU64>,

    /// Ticks abandoned because their subscription was cancelled mid-flight.
    pub results_discarded: Arc<AtomicU64>,
}

impl Counters {
    pub fn ok(&self) -> u64 {
        self.ticks_ok.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.ticks_failed.load(Ordering::Relaxed)
    }

    pub fn discarded(&self) -> u64 {
        self.results_discarded.load(Ordering::Relaxed)
    }
}
