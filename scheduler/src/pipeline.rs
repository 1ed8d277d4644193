use async_trait::async_trait;
use thiserror::Error;

use adapters::ProviderError;
use market::MarketError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Market(#[from] MarketError),
}

/// Fetch-and-transform step a subscription runs on every tick.
///
/// A pipeline owns the per-series state (price history, RNG) and is driven by
/// exactly one task, so `tick` never runs concurrently with itself.
#[async_trait]
pub trait Pipeline: Send + 'static {
    type Output: Clone + Send + Sync + 'static;

    async fn tick(&mut self) -> Result<Self::Output, PipelineError>;
}
