use anyhow::Result;
use colored::Colorize;
use powerloom_frame::{config::Config, server};
use tracing::info;

/// Execute the start command (blocks until shutdown)
pub async fn execute(cfg: Config) -> Result<()> {
    println!("{}", "Starting Powerloom frame in foreground mode...".green());
    info!("Starting Powerloom frame");

    server::start_server(cfg).await?;

    Ok(())
}
