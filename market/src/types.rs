use serde::{Deserialize, Serialize};

/// Quote payload exactly as the equity quote provider sends it.
///
/// Every field is optional on the wire; [`crate::quote::normalize_quote`]
/// decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    /// Current price
    pub c: Option<f64>,
    /// High of the day
    pub h: Option<f64>,
    /// Low of the day
    pub l: Option<f64>,
    /// Open of the day
    pub o: Option<f64>,
    /// Previous close
    pub pc: Option<f64>,
    /// Absolute change
    pub d: Option<f64>,
    /// Percent change
    pub dp: Option<f64>,
    /// Unix timestamp (seconds)
    pub t: Option<i64>,
}

/// Single-instant snapshot of an instrument's price and daily range.
///
/// Immutable: every successful fetch produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,
    /// Unix timestamp (seconds)
    pub timestamp: i64,
}

impl Quote {
    pub fn is_positive(&self) -> bool {
        self.change_percent >= 0.0
    }

    /// Turns the quote into a chart sample stamped with `time`.
    pub fn to_sample(&self, time: impl Into<String>) -> PriceSample {
        PriceSample {
            time: time.into(),
            price: self.current_price,
            change: self.change,
            change_percent: self.change_percent,
        }
    }
}

/// One point of the live price chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSample {
    /// Display-formatted wall clock time.
    pub time: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderBookLevel {
    pub price: f64,
    pub volume: f64,
}

/// Bid/ask ladder around the current price.
///
/// Books produced by [`crate::order_book`] are synthetic: `simulated` is
/// always `true` and consumers must present them as illustrative depth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBook {
    /// Descending by price.
    pub bids: Vec<OrderBookLevel>,
    /// Ascending by price.
    pub asks: Vec<OrderBookLevel>,
    pub spread: f64,
    pub spread_percent: f64,
    pub simulated: bool,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&OrderBookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&OrderBookLevel> {
        self.asks.first()
    }

    /// Largest volume on either side, used to scale depth bars.
    pub fn max_volume(&self) -> f64 {
        self.bids
            .iter()
            .chain(self.asks.iter())
            .map(|l| l.volume)
            .fold(0.0, f64::max)
    }
}

/// Provider OHLC row: `[timestamp_ms, open, high, low, close]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 5]")]
pub struct OhlcTuple {
    pub ts_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<[f64; 5]> for OhlcTuple {
    fn from([ts, open, high, low, close]: [f64; 5]) -> Self {
        Self {
            ts_ms: ts as i64,
            open,
            high,
            low,
            close,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub period_label: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub is_positive: bool,
}

impl Candle {
    /// Wick length, `high - low`.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Body length, `|close - open|`.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }
}

/// Provider market-chart row: `[timestamp_ms, price]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct PricePoint {
    pub ts_ms: i64,
    pub price: f64,
}

impl From<[f64; 2]> for PricePoint {
    fn from([ts, price]: [f64; 2]) -> Self {
        Self {
            ts_ms: ts as i64,
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub price: f64,
}

/// Row of the "top coins by market cap" listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: f64,
}

impl CoinMarket {
    pub fn is_positive(&self) -> bool {
        self.price_change_percentage_24h.unwrap_or(0.0) >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source_name: String,
    pub image: Option<String>,
    pub published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ohlc_rows_decode_from_arrays() {
        let rows: Vec<OhlcTuple> =
            serde_json::from_str("[[1700000000000, 100.0, 110.5, 95.25, 105.0]]").unwrap();

        assert_eq!(
            rows[0],
            OhlcTuple {
                ts_ms: 1_700_000_000_000,
                open: 100.0,
                high: 110.5,
                low: 95.25,
                close: 105.0,
            }
        );
    }

    #[test]
    fn short_ohlc_row_is_rejected() {
        let parsed = serde_json::from_str::<Vec<OhlcTuple>>("[[1700000000000, 100.0, 110.5]]");
        assert!(parsed.is_err());
    }

    #[test]
    fn max_volume_spans_both_sides() {
        let book = OrderBook {
            bids: vec![OrderBookLevel {
                price: 99.9,
                volume: 1_500.0,
            }],
            asks: vec![OrderBookLevel {
                price: 100.1,
                volume: 9_000.0,
            }],
            spread: 0.2,
            spread_percent: 0.2,
            simulated: true,
        };

        assert_eq!(book.max_volume(), 9_000.0);
    }

    #[test]
    fn coin_without_change_counts_as_positive() {
        let coin: CoinMarket = serde_json::from_str(
            r#"{"id":"bitcoin","symbol":"btc","name":"Bitcoin","current_price":64000.0,
                "price_change_percentage_24h":null,"market_cap":1.2e12}"#,
        )
        .unwrap();

        assert!(coin.is_positive());
    }
}
