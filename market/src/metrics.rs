//! Label/value rows for the stock metrics table.

use crate::format::format_market_cap;
use crate::types::Quote;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub metric: &'static str,
    pub value: String,
    /// Percent change shown next to the value, when the row has one.
    pub change: Option<f64>,
}

impl MetricRow {
    fn dollars(metric: &'static str, value: f64) -> Self {
        Self {
            metric,
            value: format!("${value:.2}"),
            change: None,
        }
    }
}

/// Quote rows in display order, plus `Market Cap` when the profile had one.
pub fn quote_metrics(quote: &Quote, market_cap: Option<f64>) -> Vec<MetricRow> {
    let mut rows = vec![
        MetricRow::dollars("Current Price", quote.current_price),
        MetricRow::dollars("Previous Close", quote.previous_close),
        MetricRow::dollars("Open", quote.open),
        MetricRow::dollars("High", quote.high),
        MetricRow::dollars("Low", quote.low),
        MetricRow {
            change: Some(quote.change_percent),
            ..MetricRow::dollars("Change", quote.change)
        },
    ];

    if let Some(cap) = market_cap.filter(|c| *c > 0.0) {
        rows.push(MetricRow {
            metric: "Market Cap",
            value: format_market_cap(cap),
            change: None,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Quote {
        Quote {
            current_price: 189.5,
            change: -1.2,
            change_percent: -0.63,
            high: 191.0,
            low: 188.25,
            open: 190.0,
            previous_close: 190.7,
            timestamp: 0,
        }
    }

    #[test]
    fn rows_follow_table_order() {
        let rows = quote_metrics(&quote(), None);
        let names: Vec<&str> = rows.iter().map(|r| r.metric).collect();

        assert_eq!(
            names,
            vec!["Current Price", "Previous Close", "Open", "High", "Low", "Change"]
        );
        assert_eq!(rows[0].value, "$189.50");
        assert_eq!(rows[5].value, "$-1.20");
        assert_eq!(rows[5].change, Some(-0.63));
    }

    #[test]
    fn market_cap_row_is_appended() {
        let rows = quote_metrics(&quote(), Some(2.9e12));
        let last = rows.last().unwrap();

        assert_eq!(last.metric, "Market Cap");
        assert_eq!(last.value, "$2.90T");
    }

    #[test]
    fn zero_market_cap_is_skipped() {
        assert_eq!(quote_metrics(&quote(), Some(0.0)).len(), 6);
    }
}
