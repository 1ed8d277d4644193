mod cli;
mod config;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::watch;
use tracing::{info, warn};

use adapters::{
    CoinGeckoClient, CoinSource, CompanyProfile, FinnhubClient, MediastackClient, NewsQuery,
    QuoteSource, fetch_news_or_fallback,
};
use common::logger::init_logger;
use market::metrics::quote_metrics;
use market::{SyntheticDepth, ViewState, normalize_quote};
use scheduler::pipelines::{
    CandlePipeline, OrderBookPipeline, PriceMovementPipeline, QuoteCardPipeline, TrendPipeline,
};
use scheduler::{Pipeline, PollingScheduler, SubscriptionKey, ViewKind};

use cli::{Cli, Command, WatchView};
use config::AppConfig;
use render::*;

#[tokio::main]
async fn main() -> Result<()> {
    let is_production = std::env::var("APP_ENV").unwrap_or_default() == "production";
    init_logger("dashboard", is_production);

    let cli = Cli::parse();
    let cfg = AppConfig::from_env().context("invalid configuration")?;

    match cli.command {
        Command::Quote { symbol } => show_quote(&cfg, &symbol).await,
        Command::Watch {
            symbol,
            view,
            ticks,
        } => watch_symbol(&cfg, symbol, view, ticks).await,
        Command::Candles { coin, days } => {
            let pipeline = CandlePipeline::new(coin_source(&cfg)?, coin.clone(), days);
            load_once(&cfg, SubscriptionKey::new(coin, ViewKind::Candles), pipeline, render_candles)
                .await
        }
        Command::Trend { coin, days } => {
            let pipeline = TrendPipeline::new(coin_source(&cfg)?, coin.clone(), days);
            load_once(&cfg, SubscriptionKey::new(coin, ViewKind::Trend), pipeline, render_trend)
                .await
        }
        Command::Markets { limit } => {
            let coins = coin_source(&cfg)?
                .fetch_markets(limit)
                .await
                .context("failed to load coin markets")?;
            println!("{}", render_markets(&coins));
            Ok(())
        }
        Command::News { limit } => {
            let client = MediastackClient::new(
                cfg.mediastack_base_url.clone(),
                cfg.mediastack_access_key.clone(),
                cfg.http_timeout,
            )?;
            let query = NewsQuery {
                limit,
                ..NewsQuery::default()
            };
            println!("{}", render_news(&fetch_news_or_fallback(&client, &query).await));
            Ok(())
        }
    }
}

fn quote_source(cfg: &AppConfig) -> Result<Arc<dyn QuoteSource>> {
    let client = FinnhubClient::new(
        cfg.finnhub_base_url.clone(),
        cfg.require_finnhub_key()?.to_string(),
        cfg.http_timeout,
    )?;
    Ok(Arc::new(client))
}

fn coin_source(cfg: &AppConfig) -> Result<Arc<dyn CoinSource>> {
    let client = CoinGeckoClient::new(cfg.coingecko_base_url.clone(), cfg.http_timeout)?;
    Ok(Arc::new(client))
}

async fn show_quote(cfg: &AppConfig, symbol: &str) -> Result<()> {
    let source = quote_source(cfg)?;

    let raw = source
        .fetch_quote(symbol)
        .await
        .with_context(|| format!("failed to fetch quote for {symbol}"))?;
    let quote = normalize_quote(&raw).with_context(|| format!("no usable quote for {symbol}"))?;

    // The metrics table still renders without the profile.
    let profile = source.fetch_profile(symbol).await.unwrap_or_else(|e| {
        warn!(symbol, error = %e, "company profile unavailable");
        CompanyProfile::default()
    });

    println!(
        "{}\n{}",
        profile.title(symbol),
        render_metrics(&quote_metrics(&quote, profile.market_capitalization))
    );
    Ok(())
}

async fn watch_symbol(
    cfg: &AppConfig,
    symbol: String,
    view: WatchView,
    ticks: Option<u32>,
) -> Result<()> {
    let source = quote_source(cfg)?;
    let scheduler = PollingScheduler::new(cfg.scheduler.clone());
    let key = SubscriptionKey::new(symbol.clone(), view.kind());
    let limit = ticks.unwrap_or(u32::MAX);

    info!(key = %key, "watching; ctrl-c to stop");

    match view {
        WatchView::Price => {
            let pipeline =
                PriceMovementPipeline::new(source, symbol, cfg.price_history_capacity);
            let rx = scheduler.subscribe(key, pipeline).await;
            follow(rx, limit, render_price_movement).await;
        }
        WatchView::Depth => {
            let depth = SyntheticDepth::from_entropy(cfg.order_book_levels);
            let rx = scheduler
                .subscribe(key, OrderBookPipeline::new(source, symbol, depth))
                .await;
            follow(rx, limit, render_order_book).await;
        }
        WatchView::Quote => {
            let rx = scheduler
                .subscribe(key, QuoteCardPipeline::new(source, symbol))
                .await;
            follow(rx, limit, render_quote_card).await;
        }
    }

    scheduler.shutdown().await;
    Ok(())
}

/// Prints every published state until `limit` updates, ctrl-c, or the
/// subscription ends.
async fn follow<T>(
    mut rx: watch::Receiver<ViewState<T>>,
    limit: u32,
    render: impl Fn(&T) -> String,
) {
    let mut shown = 0;

    while shown < limit {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
        }

        let out = render_state(&rx.borrow_and_update(), &render);
        println!("{out}\n");
        shown += 1;
    }
}

/// Runs a single-shot view through the scheduler and prints its result.
async fn load_once<P: Pipeline>(
    cfg: &AppConfig,
    key: SubscriptionKey,
    pipeline: P,
    render: impl Fn(&P::Output) -> String,
) -> Result<()> {
    let scheduler = PollingScheduler::new(cfg.scheduler.clone());
    let mut rx = scheduler.subscribe(key.clone(), pipeline).await;

    let changed = rx.changed().await;
    let state = rx.borrow_and_update().clone();
    scheduler.shutdown().await;

    changed.with_context(|| format!("{key} ended without a result"))?;

    println!("{}", render_state(&state, &render));

    match state.error() {
        Some(reason) => anyhow::bail!("{key}: {reason}"),
        None => Ok(()),
    }
}
