//! Business headlines from the mediastack aggregator.
//!
//! The news view must never render empty: [`fetch_news_or_fallback`] swaps in
//! a fixed list of placeholder articles on any failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use market::types::Article;

use crate::errors::ProviderError;
use crate::http::{build_client, decode_json};
use crate::provider::NewsSource;

pub const DEFAULT_BASE_URL: &str = "https://api.mediastack.com/v1";

/// Number of articles in the offline fallback list.
pub const FALLBACK_ARTICLE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub categories: String,
    pub languages: String,
    pub countries: String,
    pub limit: u32,
    pub sort: String,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            categories: "business".into(),
            languages: "en".into(),
            countries: "us".into(),
            limit: 5,
            sort: "published_desc".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    data: Option<Vec<RawArticle>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    info: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    source: Option<String>,
    image: Option<String>,
    published_at: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: non_empty(raw.title).unwrap_or_else(|| "News Article".into()),
            description: raw.description.unwrap_or_default(),
            url: non_empty(raw.url).unwrap_or_else(|| "#".into()),
            source_name: non_empty(raw.source).unwrap_or_else(|| "Unknown Source".into()),
            image: non_empty(raw.image),
            published_at: raw.published_at,
        }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

#[derive(Clone)]
pub struct MediastackClient {
    http: Client,
    base_url: String,
    access_key: String,
}

impl MediastackClient {
    pub fn new(
        base_url: String,
        access_key: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            http: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key,
        })
    }
}

#[async_trait]
impl NewsSource for MediastackClient {
    #[instrument(skip(self), level = "debug")]
    async fn fetch_news(&self, query: &NewsQuery) -> Result<Vec<Article>, ProviderError> {
        let url = format!("{}/news", self.base_url);
        let limit = query.limit.to_string();

        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("categories", query.categories.as_str()),
                ("languages", query.languages.as_str()),
                ("countries", query.countries.as_str()),
                ("limit", limit.as_str()),
                ("sort", query.sort.as_str()),
            ])
            .send()
            .await?;

        let envelope: NewsEnvelope = decode_json(resp).await?;

        if let Some(err) = envelope.error {
            return Err(ProviderError::Api(
                err.info
                    .or(err.code)
                    .unwrap_or_else(|| "API returned an error".into()),
            ));
        }

        let Some(data) = envelope.data else {
            return Err(ProviderError::Malformed("response has no `data` array".into()));
        };

        debug!(articles = data.len(), "news fetched");

        Ok(data.into_iter().map(Article::from).collect())
    }
}

/// Fetches headlines, substituting [`fallback_articles`] on any error.
pub async fn fetch_news_or_fallback(source: &dyn NewsSource, query: &NewsQuery) -> Vec<Article> {
    match source.fetch_news(query).await {
        Ok(articles) => articles,
        Err(e) => {
            warn!(error = %e, "news fetch failed; serving fallback articles");
            fallback_articles()
        }
    }
}

pub fn fallback_articles() -> Vec<Article> {
    let placeholders: [(&str, &str, &str); FALLBACK_ARTICLE_COUNT] = [
        (
            "Bitcoin Rally Continues: BTC Reaches New Milestone",
            "Crypto News Daily",
            "Latest market analysis shows continued bullish momentum...",
        ),
        (
            "Ethereum Updates: What to Expect in Q4 2025",
            "BlockChain Times",
            "The Ethereum development team announces upcoming improvements...",
        ),
        (
            "Regulatory Updates: New Guidelines for Crypto Exchanges",
            "Finance Today",
            "Global regulators implement new compliance framework...",
        ),
        (
            "Market Analysis: Top Opportunities This Week",
            "Trading Insights",
            "Expert analysts share key opportunities for investors...",
        ),
        (
            "DeFi Protocol Reaches $50B Total Value Locked",
            "Crypto Pulse",
            "Major milestone achieved as decentralized finance grows...",
        ),
    ];

    placeholders
        .into_iter()
        .map(|(title, source, description)| Article {
            title: title.into(),
            description: description.into(),
            url: "#".into(),
            source_name: source.into(),
            image: None,
            published_at: None,
        })
        .collect()
}
