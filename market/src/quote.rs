use crate::error::MarketError;
use crate::types::{Quote, RawQuote};

/// Decodes a provider quote body into its typed wire form.
pub fn parse_raw_quote(body: &[u8]) -> Result<RawQuote, MarketError> {
    serde_json::from_slice(body).map_err(|e| MarketError::MalformedPayload(e.to_string()))
}

/// Current price alone, for views that need nothing else.
///
/// Applies the same no-data sentinel as [`normalize_quote`] but does not
/// require the change fields.
pub fn current_price(raw: &RawQuote) -> Result<f64, MarketError> {
    let price = require(raw.c, "c")?;

    if price == 0.0 && raw.d.unwrap_or(0.0) == 0.0 {
        return Err(MarketError::NoData);
    }

    Ok(price)
}

/// Maps a raw provider quote into a [`Quote`].
///
/// The provider reports an unknown or halted instrument as a zero price with a
/// zero (or absent) change, which is surfaced as [`MarketError::NoData`].
/// Daily range fields fall back to the current price when absent; price,
/// change and percent change are required.
pub fn normalize_quote(raw: &RawQuote) -> Result<Quote, MarketError> {
    let current_price = current_price(raw)?;
    let change = require(raw.d, "d")?;
    let change_percent = require(raw.dp, "dp")?;

    Ok(Quote {
        current_price,
        change,
        change_percent,
        high: raw.h.unwrap_or(current_price),
        low: raw.l.unwrap_or(current_price),
        open: raw.o.unwrap_or(current_price),
        previous_close: raw.pc.unwrap_or(current_price),
        timestamp: raw.t.unwrap_or(0),
    })
}

fn require(value: Option<f64>, field: &str) -> Result<f64, MarketError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(MarketError::MalformedPayload(format!(
            "field `{field}` is not finite: {v}"
        ))),
        None => Err(MarketError::MalformedPayload(format!(
            "missing field `{field}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(c: f64, d: f64, dp: f64) -> RawQuote {
        RawQuote {
            c: Some(c),
            h: Some(c + 1.0),
            l: Some(c - 1.0),
            o: Some(c),
            pc: Some(c - d),
            d: Some(d),
            dp: Some(dp),
            t: Some(1_700_000_000),
        }
    }

    #[test]
    fn zero_price_and_change_means_no_data() {
        assert_eq!(normalize_quote(&raw(0.0, 0.0, 0.0)), Err(MarketError::NoData));
    }

    #[test]
    fn zero_price_with_null_change_means_no_data() {
        let q = RawQuote {
            c: Some(0.0),
            ..Default::default()
        };
        assert_eq!(normalize_quote(&q), Err(MarketError::NoData));
    }

    #[test]
    fn negative_change_is_preserved() {
        let q = normalize_quote(&raw(150.23, -1.2, -0.8)).unwrap();

        assert_eq!(q.current_price, 150.23);
        assert!(q.change_percent < 0.0);
        assert!(!q.is_positive());
    }

    #[test]
    fn missing_range_falls_back_to_current_price() {
        let q = normalize_quote(&RawQuote {
            c: Some(10.0),
            d: Some(0.5),
            dp: Some(5.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!((q.high, q.low, q.open, q.previous_close), (10.0, 10.0, 10.0, 10.0));
        assert_eq!(q.timestamp, 0);
    }

    #[test]
    fn missing_percent_change_is_malformed() {
        let q = RawQuote {
            c: Some(10.0),
            d: Some(0.5),
            ..Default::default()
        };
        assert!(matches!(
            normalize_quote(&q),
            Err(MarketError::MalformedPayload(msg)) if msg.contains("dp")
        ));
    }

    #[test]
    fn price_only_quote_yields_current_price() {
        let q = RawQuote {
            c: Some(42.5),
            ..Default::default()
        };

        assert_eq!(current_price(&q), Ok(42.5));
        assert!(normalize_quote(&q).is_err());
    }

    #[test]
    fn price_only_path_keeps_no_data_sentinel() {
        let q = RawQuote {
            c: Some(0.0),
            ..Default::default()
        };
        assert_eq!(current_price(&q), Err(MarketError::NoData));
        assert!(current_price(&RawQuote::default()).is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_fields() {
        let err = parse_raw_quote(br#"{"c":"abc","d":1.0}"#).unwrap_err();
        assert!(matches!(err, MarketError::MalformedPayload(_)));
    }

    #[test]
    fn parse_then_normalize_provider_body() {
        let body = br#"{"c":189.5,"d":2.1,"dp":1.12,"h":190.0,"l":186.2,"o":187.0,"pc":187.4,"t":1700000000}"#;
        let q = normalize_quote(&parse_raw_quote(body).unwrap()).unwrap();

        assert_eq!(q.high, 190.0);
        assert_eq!(q.previous_close, 187.4);
        assert!(q.is_positive());
    }
}
