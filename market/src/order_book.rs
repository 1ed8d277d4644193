//! Synthetic market depth.
//!
//! The quote provider exposes no level-2 data at this tier, so the depth view
//! is built from the current price alone: each side gets `N` levels spaced at
//! 0.1% of the price, with random volume. The result keeps the *shape* of a
//! depth chart (monotonic levels, realistic spread magnitude) and nothing
//! else. It is not liquidity data and is always marked `simulated`.
//!
//! ```text
//! bid[i] = price - price * 0.001 * (i + 1)
//! ask[i] = price + price * 0.001 * (i + 1)
//! spread = ask[0] - bid[0]
//! ```

use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::MarketError;
use crate::types::{OrderBook, OrderBookLevel};

/// Levels per side when the caller has no preference.
pub const DEFAULT_LEVELS: usize = 10;

/// Distance between adjacent levels, as a fraction of the price.
pub const LEVEL_STEP: f64 = 0.001;

/// Deepest ladder whose bids all stay above zero: level 1000 would sit at
/// `price * (1 - 1000 * LEVEL_STEP) == 0`.
pub const MAX_LEVELS: usize = 999;

/// Synthetic volume is drawn uniformly from this range.
pub const VOLUME_RANGE: Range<f64> = 1_000.0..11_000.0;

/// Builds a symmetric synthetic book around `price`.
///
/// Fails with [`MarketError::InvalidPrice`] unless `price` is finite and
/// strictly positive, and with [`MarketError::InvalidLevels`] above
/// [`MAX_LEVELS`]. A side with zero levels falls back to `price` as its
/// best level, so `levels == 0` yields a zero spread.
pub fn generate_order_book<R: Rng + ?Sized>(
    price: f64,
    levels: usize,
    rng: &mut R,
) -> Result<OrderBook, MarketError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MarketError::InvalidPrice(price));
    }
    if levels > MAX_LEVELS {
        return Err(MarketError::InvalidLevels(levels));
    }

    let step = price * LEVEL_STEP;

    let mut bids = ladder(price, -step, levels, rng);
    let mut asks = ladder(price, step, levels, rng);

    bids.sort_by(|a, b| b.price.total_cmp(&a.price));
    asks.sort_by(|a, b| a.price.total_cmp(&b.price));

    let best_bid = bids.first().map_or(price, |l| l.price);
    let best_ask = asks.first().map_or(price, |l| l.price);
    let spread = best_ask - best_bid;

    Ok(OrderBook {
        bids,
        asks,
        spread,
        spread_percent: spread / price * 100.0,
        simulated: true,
    })
}

fn ladder<R: Rng + ?Sized>(
    price: f64,
    step: f64,
    levels: usize,
    rng: &mut R,
) -> Vec<OrderBookLevel> {
    (0..levels)
        .map(|i| OrderBookLevel {
            price: price + step * (i as f64 + 1.0),
            volume: rng.gen_range(VOLUME_RANGE),
        })
        .collect()
}

/// Per-subscription book generator that owns its randomness source.
pub struct SyntheticDepth<R = StdRng> {
    rng: R,
    levels: usize,
}

impl SyntheticDepth<StdRng> {
    pub fn from_entropy(levels: usize) -> Self {
        Self::with_rng(StdRng::from_entropy(), levels)
    }

    /// Deterministic generator for tests and replays.
    pub fn seeded(seed: u64, levels: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), levels)
    }
}

impl<R: Rng> SyntheticDepth<R> {
    pub fn with_rng(rng: R, levels: usize) -> Self {
        Self { rng, levels }
    }

    pub fn generate(&mut self, price: f64) -> Result<OrderBook, MarketError> {
        generate_order_book(price, self.levels, &mut self.rng)
    }
}
