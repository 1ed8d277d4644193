//! Plain-text rendering of view states.
//!
//! Every function returns the text instead of printing it so the layout can
//! be asserted on.

use market::ViewState;
use market::format::{
    format_market_cap, format_price, format_signed_percent, format_usd, format_volume,
};
use market::metrics::MetricRow;
use market::types::{Article, CoinMarket, OrderBook, OrderBookLevel, Quote};
use scheduler::pipelines::{CandleChart, PriceMovement, TrendChart};

const BAR_WIDTH: f64 = 24.0;
const RECENT_SAMPLES: usize = 5;

pub fn render_state<T>(state: &ViewState<T>, render: impl Fn(&T) -> String) -> String {
    match state {
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Ready(v) => render(v),
        ViewState::Failed {
            reason,
            last_good: Some(v),
        } => format!("! {reason} (showing last data)\n{}", render(v)),
        ViewState::Failed {
            reason,
            last_good: None,
        } => format!("! {reason}"),
    }
}

fn arrow(up: bool) -> &'static str {
    if up { "▲" } else { "▼" }
}

fn headline(quote: &Quote) -> String {
    format!(
        "{}  {} {} ({})",
        format_price(quote.current_price),
        arrow(quote.is_positive()),
        format_usd(quote.change, 2, 2),
        format_signed_percent(quote.change_percent),
    )
}

pub fn render_quote_card(quote: &Quote) -> String {
    [
        headline(quote),
        format!(
            "Open {}  High {}  Low {}  Prev {}",
            format_price(quote.open),
            format_price(quote.high),
            format_price(quote.low),
            format_price(quote.previous_close),
        ),
    ]
    .join("\n")
}

pub fn render_metrics(rows: &[MetricRow]) -> String {
    rows.iter()
        .map(|row| match row.change {
            Some(pct) => format!(
                "{:<15}{:>14}  {}",
                row.metric,
                row.value,
                format_signed_percent(pct)
            ),
            None => format!("{:<15}{:>14}", row.metric, row.value),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_price_movement(m: &PriceMovement) -> String {
    let mut lines = vec![headline(&m.quote)];

    if let (Some(first), Some(last)) = (m.history.first(), m.history.latest()) {
        lines.push(format!(
            "{} samples, {} → {} ({})",
            m.history.len(),
            format_price(first.price),
            format_price(last.price),
            if m.is_rising { "rising" } else { "not rising" },
        ));
    }

    lines.extend(
        m.history
            .recent(RECENT_SAMPLES)
            .map(|s| format!("  {}  {}", s.time, format_price(s.price))),
    );

    lines.join("\n")
}

fn depth_row(level: &OrderBookLevel, max_volume: f64) -> String {
    let width = if max_volume > 0.0 {
        (level.volume / max_volume * BAR_WIDTH).round() as usize
    } else {
        0
    };
    format!(
        "{:>14} {:>8} {}",
        format_price(level.price),
        format_volume(level.volume),
        "#".repeat(width)
    )
}

pub fn render_order_book(book: &OrderBook) -> String {
    let max_volume = book.max_volume();
    let mut lines = Vec::with_capacity(book.asks.len() + book.bids.len() + 3);

    if book.simulated {
        lines.push("SIMULATED DEPTH: illustrative levels, not live liquidity".to_string());
    }

    lines.push("asks".to_string());
    lines.extend(book.asks.iter().rev().map(|l| depth_row(l, max_volume)));
    let mut spread = format!(
        "spread {} ({:.3}%)",
        format_usd(book.spread, 2, 4),
        book.spread_percent
    );
    if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
        spread.push_str(&format!(
            "  bid {} / ask {}",
            format_price(bid.price),
            format_price(ask.price)
        ));
    }
    lines.push(spread);
    lines.extend(book.bids.iter().map(|l| depth_row(l, max_volume)));
    lines.push("bids".to_string());

    lines.join("\n")
}

fn chart_summary(change_percent: Option<f64>, range: Option<(f64, f64)>) -> String {
    let change = change_percent.map_or_else(|| "n/a".to_string(), format_signed_percent);
    match range {
        Some((lo, hi)) => format!(
            "change {change}  range {} - {}",
            format_price(lo),
            format_price(hi)
        ),
        None => format!("change {change}"),
    }
}

pub fn render_candles(chart: &CandleChart) -> String {
    if chart.candles.is_empty() {
        return "No candle data".to_string();
    }

    let mut lines: Vec<String> = chart
        .candles
        .iter()
        .map(|c| {
            format!(
                "{:<7} O {:>10.2}  H {:>10.2}  L {:>10.2}  C {:>10.2}  {} body {:.2} range {:.2}",
                c.period_label,
                c.open,
                c.high,
                c.low,
                c.close,
                arrow(c.is_positive),
                c.body(),
                c.range(),
            )
        })
        .collect();

    lines.push(chart_summary(chart.change_percent, chart.range));
    lines.join("\n")
}

pub fn render_trend(chart: &TrendChart) -> String {
    if chart.points.is_empty() {
        return "No trend data".to_string();
    }

    let mut lines: Vec<String> = chart
        .points
        .iter()
        .map(|p| format!("{:<7} {:>14}", p.label, format_price(p.price)))
        .collect();

    lines.push(chart_summary(chart.change_percent, chart.range));
    lines.join("\n")
}

pub fn render_markets(coins: &[CoinMarket]) -> String {
    if coins.is_empty() {
        return "No market data".to_string();
    }

    coins
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let change = c
                .price_change_percentage_24h
                .map_or_else(|| "n/a".to_string(), format_signed_percent);
            format!(
                "{:>2}. {:<20} {:>14} {:>9} {} {:>10}",
                i + 1,
                format!("{} ({})", c.name, c.symbol.to_uppercase()),
                format_usd(c.current_price, 2, 8),
                change,
                arrow(c.is_positive()),
                format_market_cap(c.market_cap),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_news(articles: &[Article]) -> String {
    articles
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let mut entry = format!("{}. {}\n   {}", i + 1, a.title, a.source_name);
            if let Some(at) = &a.published_at {
                entry.push_str(" · ");
                entry.push_str(at);
            }
            if !a.description.is_empty() {
                entry.push_str("\n   ");
                entry.push_str(&a.description);
            }
            if a.url != "#" {
                entry.push_str("\n   ");
                entry.push_str(&a.url);
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
