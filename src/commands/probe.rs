use anyhow::Result;
use colored::Colorize;
use powerloom_frame::{
    config::Config, frame::message::format_aggregate_stats, providers::StatsFetcher,
};

/// Execute the probe command
///
/// Fetches the 24h UniswapV2 stats once. This is the only place the
/// diagnostic fetch runs; it is never triggered by server startup.
pub async fn execute(cfg: &Config) -> Result<()> {
    println!("{}", format!("Probing {}...", cfg.upstream.base_url).yellow());

    let fetcher = StatsFetcher::new(reqwest::Client::new(), &cfg.upstream);

    match fetcher.probe().await {
        Ok(stats) => {
            println!("{}", "✓ Upstream reachable".green());
            println!("  {}", format_aggregate_stats(&stats));
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗ Probe failed:".red(), e);
            Err(e.into())
        }
    }
}
