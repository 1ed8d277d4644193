use std::sync::Arc;

use async_trait::async_trait;

use adapters::CoinSource;
use market::trend::{transform_prices, trend_change_percent, trend_range};
use market::types::TrendPoint;

use crate::pipeline::{Pipeline, PipelineError};

#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub points: Vec<TrendPoint>,
    pub change_percent: Option<f64>,
    pub range: Option<(f64, f64)>,
}

pub struct TrendPipeline {
    source: Arc<dyn CoinSource>,
    coin_id: String,
    days: u32,
}

impl TrendPipeline {
    pub fn new(source: Arc<dyn CoinSource>, coin_id: impl Into<String>, days: u32) -> Self {
        Self {
            source,
            coin_id: coin_id.into(),
            days,
        }
    }
}

#[async_trait]
impl Pipeline for TrendPipeline {
    type Output = TrendChart;

    async fn tick(&mut self) -> Result<TrendChart, PipelineError> {
        let prices = self.source.fetch_market_chart(&self.coin_id, self.days).await?;
        let points = transform_prices(&prices)?;

        Ok(TrendChart {
            change_percent: trend_change_percent(&points).ok(),
            range: trend_range(&points),
            points,
        })
    }
}
