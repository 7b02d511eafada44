use anyhow::Result;
use colored::Colorize;
use powerloom_frame::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (file, environment and defaults merged)
pub fn show(cfg: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = render_toml(cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(loaded: Result<Config>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = loaded?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Upstream: {}", cfg.upstream.base_url);
    println!("  Frame URL: {}", cfg.frame.public_url);

    info!("Configuration validation successful");
    Ok(())
}

fn render_toml(cfg: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
