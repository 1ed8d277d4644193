use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;

use adapters::QuoteSource;
use market::time::clock_label;
use market::PriceHistory;
use market::types::Quote;

use super::fetch_quote;
use crate::pipeline::{Pipeline, PipelineError};

/// Live chart state published after every successful tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceMovement {
    pub quote: Quote,
    pub history: PriceHistory,
    pub is_rising: bool,
}

/// Polls a quote and appends it to the series' rolling history.
///
/// A failed tick returns before touching the history.
pub struct PriceMovementPipeline {
    source: Arc<dyn QuoteSource>,
    symbol: String,
    history: PriceHistory,
}

impl PriceMovementPipeline {
    pub fn new(source: Arc<dyn QuoteSource>, symbol: impl Into<String>, capacity: usize) -> Self {
        Self {
            source,
            symbol: symbol.into(),
            history: PriceHistory::with_capacity(capacity),
        }
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }
}

#[async_trait]
impl Pipeline for PriceMovementPipeline {
    type Output = PriceMovement;

    async fn tick(&mut self) -> Result<PriceMovement, PipelineError> {
        let quote = fetch_quote(&self.source, &self.symbol).await?;

        self.history.push(quote.to_sample(clock_label(&Local::now())));

        Ok(PriceMovement {
            quote,
            history: self.history.clone(),
            is_rising: self.history.is_rising(),
        })
    }
}
