use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default Powerloom deployment for Uniswap V2
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://uniswapv2.powerloom.io";

/// Data-source key shared by every Uniswap V2 lite project
pub const DEFAULT_SOURCE_KEY: &str =
    "9fb408548a732c85604dacb9c956ffc2538a3b895250741593da630d994b1f27:UNISWAPV2";

pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome! to Powerloom";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub frame: FrameConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub source_key: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrameConfig {
    /// Externally reachable URL of the frame route, used for post and image URLs
    pub public_url: String,
    pub welcome_message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                log_level: "info".to_string(),
                log_format: "text".to_string(),
            },
            upstream: UpstreamConfig {
                base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
                source_key: DEFAULT_SOURCE_KEY.to_string(),
                timeout_seconds: 30,
            },
            frame: FrameConfig {
                public_url: "http://localhost:3000/api".to_string(),
                welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        }
    }
}

/// Load configuration from an optional TOML file layered under
/// `POWERLOOM_FRAME__*` environment variables.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let defaults = Config::default();

    let config = config::Config::builder()
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("server.log_level", defaults.server.log_level)?
        .set_default("server.log_format", defaults.server.log_format)?
        .set_default("upstream.base_url", defaults.upstream.base_url)?
        .set_default("upstream.source_key", defaults.upstream.source_key)?
        .set_default("upstream.timeout_seconds", defaults.upstream.timeout_seconds as i64)?
        .set_default("frame.public_url", defaults.frame.public_url)?
        .set_default("frame.welcome_message", defaults.frame.welcome_message)?
        .set_default("metrics.enabled", defaults.metrics.enabled)?
        .set_default("metrics.endpoint", defaults.metrics.endpoint)?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("POWERLOOM_FRAME").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    let base_url = &cfg.upstream.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        anyhow::bail!("Upstream base_url must be an http(s) URL, got '{}'", base_url);
    }

    if cfg.upstream.source_key.trim().is_empty() {
        anyhow::bail!("Upstream source_key cannot be empty");
    }

    if cfg.upstream.timeout_seconds == 0 {
        anyhow::bail!("Upstream timeout_seconds must be greater than zero");
    }

    let public_url = &cfg.frame.public_url;
    if !(public_url.starts_with("http://") || public_url.starts_with("https://")) {
        anyhow::bail!("Frame public_url must be an http(s) URL, got '{}'", public_url);
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log_format '{}', expected 'text' or 'json'", other),
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/'");
    }

    Ok(())
}
