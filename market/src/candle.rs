//! OHLC rows → daily candles.

use crate::error::MarketError;
use crate::format::round2;
use crate::time::day_label;
use crate::types::{Candle, OhlcTuple};

/// Lookback requested from the OHLC provider, in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// Converts one provider row. Direction is taken from the unrounded prices.
pub fn to_candle(row: &OhlcTuple) -> Result<Candle, MarketError> {
    Ok(Candle {
        period_label: day_label(row.ts_ms)?,
        open: round2(row.open),
        high: round2(row.high),
        low: round2(row.low),
        close: round2(row.close),
        is_positive: row.close >= row.open,
    })
}

/// One candle per row, order preserved.
pub fn transform_ohlc(rows: &[OhlcTuple]) -> Result<Vec<Candle>, MarketError> {
    rows.iter().map(to_candle).collect()
}

/// `(close_last - open_first) / open_first * 100` over the whole series.
pub fn series_change_percent(candles: &[Candle]) -> Result<f64, MarketError> {
    let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
        return Err(MarketError::InsufficientData("empty candle series"));
    };

    if first.open == 0.0 {
        return Err(MarketError::InsufficientData("series opens at zero"));
    }

    Ok((last.close - first.open) / first.open * 100.0)
}

/// `(min low, max high)` across the series.
pub fn price_range(candles: &[Candle]) -> Option<(f64, f64)> {
    candles.iter().fold(None, |acc, c| match acc {
        None => Some((c.low, c.high)),
        Some((lo, hi)) => Some((lo.min(c.low), hi.max(c.high))),
    })
}
