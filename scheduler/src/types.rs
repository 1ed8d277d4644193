//! Shared types used by the scheduler subsystem.

use std::fmt;
use std::time::Duration;

/// Which view a subscription feeds. Each view has its own refresh cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Live line chart over the rolling price history.
    PriceMovement,
    /// Synthetic market depth.
    OrderBook,
    /// Single quote card.
    QuoteCard,
    /// 7-day OHLC candles.
    Candles,
    /// 7-day price trend line.
    Trend,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceMovement => "price-movement",
            Self::OrderBook => "order-book",
            Self::QuoteCard => "quote-card",
            Self::Candles => "candles",
            Self::Trend => "trend",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a subscription's pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Immediately, then every interval until cancelled.
    Every(Duration),
    /// Immediately, and never again.
    Once,
}

/// Refresh intervals per view.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub price_movement_every: Duration,
    pub order_book_every: Duration,
    pub quote_card_every: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            price_movement_every: Duration::from_secs(2),
            order_book_every: Duration::from_secs(5),
            quote_card_every: Duration::from_secs(30),
        }
    }
}

impl SchedulerConfig {
    pub fn cadence_for(&self, view: ViewKind) -> Cadence {
        match view {
            ViewKind::PriceMovement => Cadence::Every(self.price_movement_every),
            ViewKind::OrderBook => Cadence::Every(self.order_book_every),
            ViewKind::QuoteCard => Cadence::Every(self.quote_card_every),
            // Chart views load once per mount.
            ViewKind::Candles | ViewKind::Trend => Cadence::Once,
        }
    }
}

/// One data series: an instrument shown in one view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionKey {
    pub symbol: String,
    pub view: ViewKind,
}

impl SubscriptionKey {
    pub fn new(symbol: impl Into<String>, view: ViewKind) -> Self {
        Self {
            symbol: symbol.into(),
            view,
        }
    }
}

impl fmt::Display for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.symbol, self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cadences_match_views() {
        let cfg = SchedulerConfig::default();

        assert_eq!(
            cfg.cadence_for(ViewKind::PriceMovement),
            Cadence::Every(Duration::from_secs(2))
        );
        assert_eq!(
            cfg.cadence_for(ViewKind::OrderBook),
            Cadence::Every(Duration::from_secs(5))
        );
        assert_eq!(
            cfg.cadence_for(ViewKind::QuoteCard),
            Cadence::Every(Duration::from_secs(30))
        );
        assert_eq!(cfg.cadence_for(ViewKind::Candles), Cadence::Once);
    }

    #[test]
    fn key_display() {
        let key = SubscriptionKey::new("AAPL", ViewKind::OrderBook);
        assert_eq!(key.to_string(), "AAPL/order-book");
    }
}
