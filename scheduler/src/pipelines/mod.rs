//! Concrete pipelines, one per view.

pub mod candles;
pub mod order_book;
pub mod price_movement;
pub mod quote_card;
pub mod trend;

pub use candles::{CandleChart, CandlePipeline};
pub use order_book::OrderBookPipeline;
pub use price_movement::{PriceMovement, PriceMovementPipeline};
pub use quote_card::QuoteCardPipeline;
pub use trend::{TrendChart, TrendPipeline};

use std::sync::Arc;

use adapters::QuoteSource;
use market::normalize_quote;
use market::types::Quote;

use crate::pipeline::PipelineError;

/// Fetches and normalizes one quote; shared by every quote-driven view.
pub(crate) async fn fetch_quote(
    source: &Arc<dyn QuoteSource>,
    symbol: &str,
) -> Result<Quote, PipelineError> {
    let raw = source.fetch_quote(symbol).await?;
    Ok(normalize_quote(&raw)?)
}
