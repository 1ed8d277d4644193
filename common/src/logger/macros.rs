use std::time::Duration;

use tracing::{Span, field};

use super::TraceId;

/// Root span for one polling subscription.
///
/// `symbol` and `view` start empty and are filled in by [`annotate_span`]
/// once the subscription key is known.
pub fn subscription_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!(
        "subscription",
        name = %name,
        trace_id = %trace_id,
        symbol = field::Empty,
        view = field::Empty
    )
}

pub fn annotate_span(span: &Span, symbol: &str, view: Option<&str>) {
    span.record("symbol", field::display(symbol));
    if let Some(view) = view {
        span.record("view", field::display(view));
    }
}

/// Awaits `fut` and logs under the `performance` target when it took
/// longer than `max`.
pub async fn warn_if_slow<F, T>(label: &'static str, max: Duration, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let start = std::time::Instant::now();
    let out = fut.await;
    let elapsed = start.elapsed();
    if elapsed > max {
        tracing::warn!(
            target: "performance",
            label = label,
            elapsed_ms = elapsed.as_millis() as u64,
            "slow operation detected"
        );
    }
    out
}
