//! Market-chart price series → trend line points.

use crate::error::MarketError;
use crate::format::round2;
use crate::time::day_label;
use crate::types::{PricePoint, TrendPoint};

pub fn transform_prices(points: &[PricePoint]) -> Result<Vec<TrendPoint>, MarketError> {
    points
        .iter()
        .map(|p| {
            Ok(TrendPoint {
                label: day_label(p.ts_ms)?,
                price: round2(p.price),
            })
        })
        .collect()
}

/// Percent move from the first to the last point.
pub fn trend_change_percent(points: &[TrendPoint]) -> Result<f64, MarketError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(MarketError::InsufficientData("empty trend series"));
    };

    if first.price == 0.0 {
        return Err(MarketError::InsufficientData("trend starts at zero"));
    }

    Ok((last.price - first.price) / first.price * 100.0)
}

pub fn trend_range(points: &[TrendPoint]) -> Option<(f64, f64)> {
    points.iter().fold(None, |acc, p| match acc {
        None => Some((p.price, p.price)),
        Some((lo, hi)) => Some((lo.min(p.price), hi.max(p.price))),
    })
}
