use std::sync::Arc;

use async_trait::async_trait;

use adapters::QuoteSource;
use market::types::Quote;

use super::fetch_quote;
use crate::pipeline::{Pipeline, PipelineError};

pub struct QuoteCardPipeline {
    source: Arc<dyn QuoteSource>,
    symbol: String,
}

impl QuoteCardPipeline {
    pub fn new(source: Arc<dyn QuoteSource>, symbol: impl Into<String>) -> Self {
        Self {
            source,
            symbol: symbol.into(),
        }
    }
}

#[async_trait]
impl Pipeline for QuoteCardPipeline {
    type Output = Quote;

    async fn tick(&mut self) -> Result<Quote, PipelineError> {
        fetch_quote(&self.source, &self.symbol).await
    }
}
