#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use adapters::{CoinSource, CompanyProfile, ProviderError, QuoteSource};
use market::MarketError;
use market::types::{CoinMarket, OhlcTuple, PricePoint, RawQuote};
use scheduler::{Pipeline, PipelineError};

pub fn raw_quote(price: f64) -> RawQuote {
    RawQuote {
        c: Some(price),
        h: Some(price + 1.0),
        l: Some(price - 1.0),
        o: Some(price),
        pc: Some(price - 0.5),
        d: Some(0.5),
        dp: Some(0.5 / (price - 0.5) * 100.0),
        t: Some(1_700_000_000),
    }
}

/// Quote source that replays a script; `None` answers with HTTP 503.
/// The last step repeats once the script runs out.
pub struct ScriptedQuotes {
    script: Mutex<Vec<Option<f64>>>,
    pub calls: AtomicUsize,
}

impl ScriptedQuotes {
    pub fn new(script: Vec<Option<f64>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for ScriptedQuotes {
    async fn fetch_quote(&self, _symbol: &str) -> Result<RawQuote, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let step = {
            let script = self.script.lock().unwrap();
            script.get(n).or(script.last()).copied().flatten()
        };

        step.map(raw_quote)
            .ok_or(ProviderError::Status { status: 503 })
    }

    async fn fetch_profile(&self, _symbol: &str) -> Result<CompanyProfile, ProviderError> {
        Err(ProviderError::Status { status: 404 })
    }
}

/// Answers with a bare price: no change, percent change or daily range.
pub struct PriceOnlyQuotes(pub f64);

#[async_trait]
impl QuoteSource for PriceOnlyQuotes {
    async fn fetch_quote(&self, _symbol: &str) -> Result<RawQuote, ProviderError> {
        Ok(RawQuote {
            c: Some(self.0),
            ..Default::default()
        })
    }

    async fn fetch_profile(&self, _symbol: &str) -> Result<CompanyProfile, ProviderError> {
        Ok(CompanyProfile::default())
    }
}

pub struct FixedCoins {
    pub ohlc: Vec<OhlcTuple>,
    pub prices: Vec<PricePoint>,
    pub calls: AtomicUsize,
}

impl FixedCoins {
    pub fn new(ohlc: Vec<OhlcTuple>, prices: Vec<PricePoint>) -> Arc<Self> {
        Arc::new(Self {
            ohlc,
            prices,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoinSource for FixedCoins {
    async fn fetch_ohlc(&self, _coin_id: &str, _days: u32) -> Result<Vec<OhlcTuple>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.ohlc.clone())
    }

    async fn fetch_market_chart(
        &self,
        _coin_id: &str,
        _days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.prices.clone())
    }

    async fn fetch_markets(&self, _limit: u32) -> Result<Vec<CoinMarket>, ProviderError> {
        Ok(Vec::new())
    }
}

/// Pipeline that counts ticks and takes `delay` of (virtual) time per tick.
pub struct Counting {
    pub calls: Arc<AtomicUsize>,
    pub delay: Duration,
    pub fail: bool,
}

impl Counting {
    pub fn new(delay: Duration) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: calls.clone(),
                delay,
                fail: false,
            },
            calls,
        )
    }
}

#[async_trait]
impl Pipeline for Counting {
    type Output = usize;

    async fn tick(&mut self) -> Result<usize, PipelineError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(MarketError::NoData.into());
        }
        Ok(n)
    }
}
