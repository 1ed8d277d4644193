use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use market::parse_raw_quote;
use market::types::RawQuote;

use crate::errors::ProviderError;
use crate::http::{build_client, decode_json, read_body};
use crate::provider::QuoteSource;

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Subset of `/stock/profile2` the dashboard shows.
///
/// Unknown symbols come back as `{}`, hence every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub ticker: Option<String>,
    #[serde(rename = "marketCapitalization")]
    pub market_capitalization: Option<f64>,
}

impl CompanyProfile {
    /// `Apple Inc (AAPL)` when the profile names the company, else `symbol`.
    pub fn title(&self, symbol: &str) -> String {
        match (&self.name, &self.ticker) {
            (Some(name), Some(ticker)) if !name.is_empty() => format!("{name} ({ticker})"),
            (Some(name), None) if !name.is_empty() => format!("{name} ({symbol})"),
            _ => symbol.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct FinnhubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl FinnhubClient {
    pub fn new(base_url: String, token: String, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            http: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl QuoteSource for FinnhubClient {
    #[instrument(skip(self), fields(symbol = %symbol), level = "debug")]
    async fn fetch_quote(&self, symbol: &str) -> Result<RawQuote, ProviderError> {
        let url = format!("{}/quote", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[("symbol", symbol), ("token", self.token.as_str())])
            .send()
            .await?;

        let raw = parse_raw_quote(&read_body(resp).await?)?;

        debug!(c = ?raw.c, d = ?raw.d, dp = ?raw.dp, "quote fetched");

        Ok(raw)
    }

    #[instrument(skip(self), fields(symbol = %symbol), level = "debug")]
    async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, ProviderError> {
        let url = format!("{}/stock/profile2", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[("symbol", symbol), ("token", self.token.as_str())])
            .send()
            .await?;

        decode_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_company_name() {
        let profile: CompanyProfile = serde_json::from_str(
            r#"{"name":"Apple Inc","ticker":"AAPL","marketCapitalization":2800000.5}"#,
        )
        .unwrap();

        assert_eq!(profile.title("aapl"), "Apple Inc (AAPL)");
        assert_eq!(profile.market_capitalization, Some(2_800_000.5));
    }

    #[test]
    fn empty_profile_falls_back_to_symbol() {
        assert_eq!(CompanyProfile::default().title("ZZZZ"), "ZZZZ");
    }
}
