use clap::{Parser, Subcommand, ValueEnum};

use market::candle::DEFAULT_LOOKBACK_DAYS;
use scheduler::ViewKind;

#[derive(Debug, Parser)]
#[clap(name = "dashboard", version, about = "Market dashboard views in the terminal")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// One quote plus the metrics table
    Quote {
        /// Ticker symbol, e.g. AAPL
        symbol: String,
    },

    /// Poll a live view until interrupted
    Watch {
        symbol: String,

        #[clap(long, value_enum, default_value_t = WatchView::Price)]
        view: WatchView,

        /// Stop after this many updates
        #[clap(long)]
        ticks: Option<u32>,
    },

    /// Daily OHLC candles for a coin
    Candles {
        /// Coin id, e.g. bitcoin
        coin: String,

        #[clap(long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
        days: u32,
    },

    /// Price trend line for a coin
    Trend {
        coin: String,

        #[clap(long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
        days: u32,
    },

    /// Top coins by market cap
    Markets {
        #[clap(long, default_value_t = 10)]
        limit: u32,
    },

    /// Business headlines
    News {
        #[clap(long, default_value_t = 5)]
        limit: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WatchView {
    /// Rolling price chart (2 s)
    Price,
    /// Simulated order book (5 s)
    Depth,
    /// Quote card (30 s)
    Quote,
}

impl WatchView {
    pub fn kind(self) -> ViewKind {
        match self {
            Self::Price => ViewKind::PriceMovement,
            Self::Depth => ViewKind::OrderBook,
            Self::Quote => ViewKind::QuoteCard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_defaults_to_price_view() {
        let cli = Cli::try_parse_from(["dashboard", "watch", "AAPL"]).unwrap();

        let Command::Watch { symbol, view, ticks } = cli.command else {
            panic!("expected watch");
        };
        assert_eq!(symbol, "AAPL");
        assert_eq!(view.kind(), ViewKind::PriceMovement);
        assert_eq!(ticks, None);
    }

    #[test]
    fn depth_view_and_tick_limit_parse() {
        let cli =
            Cli::try_parse_from(["dashboard", "watch", "MSFT", "--view", "depth", "--ticks", "3"])
                .unwrap();

        assert!(matches!(
            cli.command,
            Command::Watch {
                view: WatchView::Depth,
                ticks: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn chart_commands_default_to_seven_days() {
        let cli = Cli::try_parse_from(["dashboard", "candles", "bitcoin"]).unwrap();
        assert!(matches!(cli.command, Command::Candles { days: 7, .. }));
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert!(Cli::try_parse_from(["dashboard", "watch", "AAPL", "--view", "heatmap"]).is_err());
    }
}
