use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use powerloom_frame::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    // Logging settings live in the config, so load it before anything else
    let loaded = config::load_config(&args.config);
    match &loaded {
        Ok(cfg) => init_tracing(&cfg.server.log_level, &cfg.server.log_format),
        Err(_) => init_tracing("info", "text"),
    }

    match command {
        cli::Commands::Start => commands::start::execute(loaded?).await?,
        cli::Commands::Test => commands::test::execute(&args.config, loaded)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&loaded?)?,
            cli::ConfigCommands::Validate => commands::config::validate(loaded)?,
        },
        cli::Commands::Probe => commands::probe::execute(&loaded?).await?,
        cli::Commands::Version => {
            println!("Powerloom frame v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
