use crate::{
    frame::Action,
    metrics,
    models::powerloom::{AggregateStats, TokenPair},
    providers::StatsFetcher,
};

pub const EPOCH_ID_FAILED: &str = "Failed to fetch epoch ID";
pub const TOP_PAIRS_FAILED: &str = "Failed to fetch top 3 pairs";
pub const AGGREGATE_STATS_FAILED: &str = "Failed to fetch UniswapV2 24h stats";

/// `"<name> with volume: <volume>"` per pair, comma separated
pub fn format_top_pairs(pairs: &[TokenPair]) -> String {
    pairs
        .iter()
        .map(|pair| format!("{} with volume: {:.2}", pair.name, pair.volume_24h))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numbers use `f64`'s shortest round-trip `Display`: no exponent form for
/// very large values, and `-0` prints as `-0`.
pub fn format_aggregate_stats(stats: &AggregateStats) -> String {
    format!(
        "24h Stats - 24h Fee: {}, 24h TVL: {}, 24h Volume: {}",
        stats.fee_24h, stats.tvl, stats.volume_24h
    )
}

/// Run the operation behind `action` and produce the message to display.
///
/// Upstream failures are logged and replaced by a fixed fallback message;
/// nothing propagates past this point. `Reset` and `Idle` never touch the
/// network.
pub async fn dispatch(action: Action, fetcher: &StatsFetcher, welcome: &str) -> String {
    metrics::record_frame_action(action.as_str());

    match action {
        Action::EpochId => match fetcher.resolve_epoch_id().await {
            Ok(epoch_id) => format!("Current Epoch ID: {}", epoch_id),
            Err(e) => {
                tracing::error!(action = %action, error = %e, "Failed to fetch epoch ID");
                EPOCH_ID_FAILED.to_string()
            }
        },
        Action::TopPairs => match fetcher.fetch_top_pairs().await {
            Ok(pairs) => format!("Top 3 Pairs: {}", format_top_pairs(&pairs)),
            Err(e) => {
                tracing::error!(action = %action, error = %e, "Failed to fetch top 3 pairs");
                TOP_PAIRS_FAILED.to_string()
            }
        },
        Action::AggregateStats => match fetcher.fetch_aggregate_stats().await {
            Ok(stats) => format_aggregate_stats(&stats),
            Err(e) => {
                tracing::error!(action = %action, error = %e, "Failed to fetch UniswapV2 24h stats");
                AGGREGATE_STATS_FAILED.to_string()
            }
        },
        Action::Reset | Action::Idle => welcome.to_string(),
    }
}
