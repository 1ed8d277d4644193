use std::sync::Arc;

use async_trait::async_trait;

use adapters::QuoteSource;
use market::types::OrderBook;
use market::{SyntheticDepth, current_price};

use crate::pipeline::{Pipeline, PipelineError};

/// Current price → synthetic depth around it.
pub struct OrderBookPipeline {
    source: Arc<dyn QuoteSource>,
    symbol: String,
    depth: SyntheticDepth,
}

impl OrderBookPipeline {
    pub fn new(source: Arc<dyn QuoteSource>, symbol: impl Into<String>, depth: SyntheticDepth) -> Self {
        Self {
            source,
            symbol: symbol.into(),
            depth,
        }
    }
}

#[async_trait]
impl Pipeline for OrderBookPipeline {
    type Output = OrderBook;

    async fn tick(&mut self) -> Result<OrderBook, PipelineError> {
        // Depth only needs a price; a quote without change fields still counts.
        let raw = self.source.fetch_quote(&self.symbol).await?;
        Ok(self.depth.generate(current_price(&raw)?)?)
    }
}
