use std::ops::RangeInclusive;
use std::time::Duration;

use anyhow::{Context, Result};

use market::order_book::{DEFAULT_LEVELS, MAX_LEVELS};
use market::rolling_window::DEFAULT_HISTORY_CAPACITY;
use scheduler::SchedulerConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    // =========================
    // Providers
    // =========================
    /// Equity quote provider. `FINNHUB_BASE_URL`.
    pub finnhub_base_url: String,

    /// Sent as the `token` query parameter. `FINNHUB_API_KEY`.
    ///
    /// Empty means unset; quote commands refuse to start without it.
    pub finnhub_api_key: String,

    /// Crypto market data; no key needed. `COINGECKO_BASE_URL`.
    pub coingecko_base_url: String,

    /// Headline aggregator. `MEDIASTACK_BASE_URL`.
    pub mediastack_base_url: String,

    /// `MEDIASTACK_ACCESS_KEY`. A missing key only costs the live feed: the
    /// news command falls back to placeholder articles.
    pub mediastack_access_key: String,

    /// Per-request timeout for every provider. `HTTP_TIMEOUT_MS`.
    pub http_timeout: Duration,

    // =========================
    // Views
    // =========================
    /// Synthetic depth levels per side, `1..=MAX_LEVELS`. `ORDER_BOOK_LEVELS`.
    pub order_book_levels: usize,

    /// Samples kept by the live price chart. `PRICE_HISTORY_CAPACITY`.
    pub price_history_capacity: usize,

    /// Refresh cadence per view.
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let number = |key: &str, default: u64| -> Result<u64> {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(v) => v
                    .trim()
                    .parse()
                    .with_context(|| format!("{key} must be a non-negative integer, got {v:?}")),
                None => Ok(default),
            }
        };

        let bounded = |key: &str, default: u64, allowed: RangeInclusive<u64>| -> Result<u64> {
            let v = number(key, default)?;
            if !allowed.contains(&v) {
                anyhow::bail!(
                    "{key} must be between {} and {}, got {v}",
                    allowed.start(),
                    allowed.end()
                );
            }
            Ok(v)
        };

        Ok(Self {
            finnhub_base_url: text("FINNHUB_BASE_URL", adapters::finnhub::DEFAULT_BASE_URL),
            finnhub_api_key: text("FINNHUB_API_KEY", ""),
            coingecko_base_url: text("COINGECKO_BASE_URL", adapters::coingecko::DEFAULT_BASE_URL),
            mediastack_base_url: text("MEDIASTACK_BASE_URL", adapters::mediastack::DEFAULT_BASE_URL),
            mediastack_access_key: text("MEDIASTACK_ACCESS_KEY", ""),
            http_timeout: Duration::from_millis(number("HTTP_TIMEOUT_MS", 5_000)?),
            order_book_levels: bounded(
                "ORDER_BOOK_LEVELS",
                DEFAULT_LEVELS as u64,
                1..=MAX_LEVELS as u64,
            )? as usize,
            price_history_capacity: number(
                "PRICE_HISTORY_CAPACITY",
                DEFAULT_HISTORY_CAPACITY as u64,
            )? as usize,
            scheduler: SchedulerConfig::default(),
        })
    }

    pub fn require_finnhub_key(&self) -> Result<&str> {
        if self.finnhub_api_key.is_empty() {
            anyhow::bail!("FINNHUB_API_KEY is not set");
        }
        Ok(&self.finnhub_api_key)
    }
}
