use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use market::types::{CoinMarket, OhlcTuple, PricePoint};

use crate::errors::ProviderError;
use crate::http::{build_client, decode_json};
use crate::provider::CoinSource;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// All prices are requested in this currency.
const VS_CURRENCY: &str = "usd";

#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<PricePoint>,
}

#[derive(Clone)]
pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            http: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CoinSource for CoinGeckoClient {
    #[instrument(skip(self), fields(coin_id = %coin_id), level = "debug")]
    async fn fetch_ohlc(&self, coin_id: &str, days: u32) -> Result<Vec<OhlcTuple>, ProviderError> {
        let url = format!("{}/coins/{}/ohlc", self.base_url, coin_id);

        let days = days.to_string();

        let resp = self
            .http
            .get(&url)
            .query(&[("vs_currency", VS_CURRENCY), ("days", days.as_str())])
            .send()
            .await?;

        let rows: Vec<OhlcTuple> = decode_json(resp).await?;
        debug!(rows = rows.len(), "ohlc fetched");

        Ok(rows)
    }

    #[instrument(skip(self), fields(coin_id = %coin_id), level = "debug")]
    async fn fetch_market_chart(
        &self,
        coin_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, coin_id);

        let days = days.to_string();

        let resp = self
            .http
            .get(&url)
            .query(&[("vs_currency", VS_CURRENCY), ("days", days.as_str())])
            .send()
            .await?;

        let chart: MarketChart = decode_json(resp).await?;
        debug!(points = chart.prices.len(), "market chart fetched");

        Ok(chart.prices)
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_markets(&self, limit: u32) -> Result<Vec<CoinMarket>, ProviderError> {
        let url = format!("{}/coins/markets", self.base_url);
        let per_page = limit.to_string();

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("vs_currency", VS_CURRENCY),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
            ])
            .send()
            .await?;

        decode_json(resp).await
    }
}
