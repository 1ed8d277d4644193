use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use adapters::CoinSource;
use market::candle::{price_range, series_change_percent, transform_ohlc};
use market::types::Candle;

use crate::pipeline::{Pipeline, PipelineError};

#[derive(Debug, Clone, PartialEq)]
pub struct CandleChart {
    pub candles: Vec<Candle>,
    /// `None` when the series cannot support a percent change.
    pub change_percent: Option<f64>,
    pub range: Option<(f64, f64)>,
}

pub struct CandlePipeline {
    source: Arc<dyn CoinSource>,
    coin_id: String,
    days: u32,
}

impl CandlePipeline {
    pub fn new(source: Arc<dyn CoinSource>, coin_id: impl Into<String>, days: u32) -> Self {
        Self {
            source,
            coin_id: coin_id.into(),
            days,
        }
    }
}

#[async_trait]
impl Pipeline for CandlePipeline {
    type Output = CandleChart;

    async fn tick(&mut self) -> Result<CandleChart, PipelineError> {
        let rows = self.source.fetch_ohlc(&self.coin_id, self.days).await?;
        let candles = transform_ohlc(&rows)?;

        let change_percent = match series_change_percent(&candles) {
            Ok(p) => Some(p),
            Err(e) => {
                debug!(coin_id = %self.coin_id, reason = %e, "no series change");
                None
            }
        };

        Ok(CandleChart {
            range: price_range(&candles),
            change_percent,
            candles,
        })
    }
}
