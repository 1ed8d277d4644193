//! HTTP clients for the dashboard's data providers.
//!
//! Each provider is reachable through a trait in [`provider`] so the polling
//! pipelines can run against mocks.

pub mod coingecko;
pub mod errors;
pub mod finnhub;
pub mod http;
pub mod mediastack;
pub mod provider;

pub use coingecko::CoinGeckoClient;
pub use errors::ProviderError;
pub use finnhub::{CompanyProfile, FinnhubClient};
pub use mediastack::{MediastackClient, NewsQuery, fallback_articles, fetch_news_or_fallback};
pub use provider::{CoinSource, NewsSource, QuoteSource};
