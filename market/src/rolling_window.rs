use std::collections::VecDeque;

use crate::types::PriceSample;

/// Number of samples the live price chart keeps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// Fixed-capacity sliding window over the most recent price samples.
///
/// Ordered oldest-first. Pushing past capacity evicts from the front, so
/// the window always holds the last `capacity` observations of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    samples: VecDeque<PriceSample>,
    capacity: usize,
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, sample: PriceSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest sample; the chart draws its reference line here.
    pub fn first(&self) -> Option<&PriceSample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&PriceSample> {
        self.samples.back()
    }

    /// The whole window, oldest-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PriceSample> + ExactSizeIterator {
        self.samples.iter()
    }

    pub fn to_vec(&self) -> Vec<PriceSample> {
        self.samples.iter().cloned().collect()
    }

    /// Newest `n` samples, newest-first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &PriceSample> {
        self.samples.iter().rev().take(n)
    }

    /// `true` only when the latest price is strictly above the one before it.
    pub fn is_rising(&self) -> bool {
        let mut newest = self.samples.iter().rev();
        match (newest.next(), newest.next()) {
            (Some(last), Some(prev)) => last.price > prev.price,
            _ => false,
        }
    }
}
