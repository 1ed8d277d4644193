mod support;

use std::sync::Arc;

use adapters::ProviderError;
use market::types::{OhlcTuple, PricePoint};
use market::{MarketError, SyntheticDepth};
use scheduler::pipelines::{
    CandlePipeline, OrderBookPipeline, PriceMovementPipeline, QuoteCardPipeline, TrendPipeline,
};
use scheduler::{Pipeline, PipelineError};

use support::{FixedCoins, PriceOnlyQuotes, ScriptedQuotes};

#[tokio::test]
async fn quote_card_normalizes_provider_quote() {
    let mut p = QuoteCardPipeline::new(ScriptedQuotes::new(vec![Some(189.5)]), "AAPL");

    let q = p.tick().await.unwrap();

    assert_eq!(q.current_price, 189.5);
    assert_eq!(q.high, 190.5);
    assert!(q.is_positive());
}

#[tokio::test]
async fn provider_failure_is_reported_as_provider_error() {
    let mut p = QuoteCardPipeline::new(ScriptedQuotes::new(vec![None]), "AAPL");

    let err = p.tick().await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Provider(ProviderError::Status { status: 503 })
    ));
}

#[tokio::test]
async fn price_history_grows_only_on_success() {
    let quotes = ScriptedQuotes::new(vec![Some(10.0), None, Some(9.0), Some(11.0)]);
    let mut p = PriceMovementPipeline::new(quotes, "AAPL", 30);

    let first = p.tick().await.unwrap();
    assert_eq!(first.history.len(), 1);
    assert!(!first.is_rising);

    assert!(p.tick().await.is_err());
    assert_eq!(p.history().len(), 1);

    let falling = p.tick().await.unwrap();
    assert!(!falling.is_rising);

    let rising = p.tick().await.unwrap();
    assert!(rising.is_rising);
    assert_eq!(rising.quote.current_price, 11.0);

    let prices: Vec<f64> = rising.history.iter().map(|s| s.price).collect();
    assert_eq!(prices, vec![10.0, 9.0, 11.0]);
}

#[tokio::test]
async fn price_history_respects_capacity() {
    let script = (1..=8).map(|i| Some(i as f64)).collect();
    let mut p = PriceMovementPipeline::new(ScriptedQuotes::new(script), "AAPL", 5);

    for _ in 0..8 {
        p.tick().await.unwrap();
    }

    assert_eq!(p.history().len(), 5);
    assert_eq!(p.history().first().unwrap().price, 4.0);
    assert_eq!(p.history().latest().unwrap().price, 8.0);
}

#[tokio::test]
async fn order_book_is_built_around_current_price() {
    let mut p = OrderBookPipeline::new(
        ScriptedQuotes::new(vec![Some(100.0)]),
        "AAPL",
        SyntheticDepth::seeded(1, 10),
    );

    let book = p.tick().await.unwrap();

    assert!(book.simulated);
    assert_eq!(book.bids.len(), 10);
    assert!((book.bids[0].price - 99.9).abs() < 1e-9);
    assert!((book.asks[0].price - 100.1).abs() < 1e-9);
}

#[tokio::test]
async fn order_book_needs_only_the_current_price() {
    let mut p = OrderBookPipeline::new(
        Arc::new(PriceOnlyQuotes(250.0)),
        "AAPL",
        SyntheticDepth::seeded(2, 5),
    );

    let book = p.tick().await.unwrap();

    assert_eq!(book.asks.len(), 5);
    assert!((book.asks[0].price - 250.25).abs() < 1e-9);
}

#[tokio::test]
async fn candles_with_zero_open_have_no_change_percent() {
    let coins = FixedCoins::new(
        vec![OhlcTuple {
            ts_ms: 1_700_000_000_000,
            open: 0.0,
            high: 1.0,
            low: 0.0,
            close: 1.0,
        }],
        Vec::new(),
    );

    let chart = CandlePipeline::new(coins, "dust", 7).tick().await.unwrap();

    assert_eq!(chart.candles.len(), 1);
    assert_eq!(chart.change_percent, None);
    assert_eq!(chart.candles[0].period_label, "Nov 14");
}

#[tokio::test]
async fn empty_candle_series_is_not_an_error() {
    let chart = CandlePipeline::new(FixedCoins::new(Vec::new(), Vec::new()), "bitcoin", 7)
        .tick()
        .await
        .unwrap();

    assert!(chart.candles.is_empty());
    assert_eq!(chart.change_percent, None);
    assert_eq!(chart.range, None);
}

#[tokio::test]
async fn trend_reports_change_and_range() {
    let coins = FixedCoins::new(
        Vec::new(),
        vec![
            PricePoint {
                ts_ms: 1_700_000_000_000,
                price: 200.0,
            },
            PricePoint {
                ts_ms: 1_700_086_400_000,
                price: 150.0,
            },
            PricePoint {
                ts_ms: 1_700_172_800_000,
                price: 250.0,
            },
        ],
    );

    let chart = TrendPipeline::new(coins, "ethereum", 7).tick().await.unwrap();

    assert_eq!(chart.points.len(), 3);
    assert_eq!(chart.points[2].label, "Nov 16");
    assert_eq!(chart.change_percent, Some(25.0));
    assert_eq!(chart.range, Some((150.0, 250.0)));
}

#[tokio::test]
async fn out_of_range_timestamp_fails_the_tick() {
    let coins = FixedCoins::new(
        Vec::new(),
        vec![PricePoint {
            ts_ms: i64::MAX,
            price: 1.0,
        }],
    );

    let err = TrendPipeline::new(coins, "bitcoin", 7).tick().await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Market(MarketError::MalformedPayload(_))
    ));
}
