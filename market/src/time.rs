use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::error::MarketError;

/// `02:05:09 PM` style label used on the live price chart.
pub fn clock_label<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%I:%M:%S %p").to_string()
}

/// `Oct 16` style label (UTC) for daily chart buckets.
pub fn day_label(ts_ms: i64) -> Result<String, MarketError> {
    DateTime::from_timestamp_millis(ts_ms)
        .map(|dt| dt.format("%b %-d").to_string())
        .ok_or_else(|| MarketError::MalformedPayload(format!("timestamp out of range: {ts_ms}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn clock_label_is_twelve_hour() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 9).unwrap();
        assert_eq!(clock_label(&at), "02:05:09 PM");
    }

    #[test]
    fn day_label_drops_leading_zero() {
        // 2024-03-09T00:00:00Z
        assert_eq!(day_label(1_709_942_400_000).unwrap(), "Mar 9");
    }

    #[test]
    fn absurd_timestamp_is_malformed() {
        assert!(day_label(i64::MAX).is_err());
    }
}
