use async_trait::async_trait;

use market::types::{Article, CoinMarket, OhlcTuple, PricePoint, RawQuote};

use crate::errors::ProviderError;
use crate::finnhub::CompanyProfile;
use crate::mediastack::NewsQuery;

/// Equity quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<RawQuote, ProviderError>;

    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, ProviderError>;
}

/// Crypto market data.
#[async_trait]
pub trait CoinSource: Send + Sync {
    async fn fetch_ohlc(&self, coin_id: &str, days: u32) -> Result<Vec<OhlcTuple>, ProviderError>;

    async fn fetch_market_chart(
        &self,
        coin_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError>;

    async fn fetch_markets(&self, limit: u32) -> Result<Vec<CoinMarket>, ProviderError>;
}

/// Business headlines.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_news(&self, query: &NewsQuery) -> Result<Vec<Article>, ProviderError>;
}
