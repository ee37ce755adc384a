use std::sync::LazyLock;

use secrecy::SecretString;
use serde::Deserialize;

/// Server configuration, loaded once from `bms.toml` (if present) and
/// `BMS_`-prefixed environment variables.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated latency applied to list reads, in milliseconds.
    pub read_latency_ms: u64,
    /// Simulated latency applied to mutations, in milliseconds.
    pub write_latency_ms: u64,
    /// Seconds between monitoring snapshot refreshes.
    pub monitor_refresh_secs: u64,
    /// The single password accepted for every demo account.
    pub demo_password: SecretString,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_latency_ms: 300,
            write_latency_ms: 500,
            monitor_refresh_secs: 30,
            demo_password: SecretString::from("password123"),
        }
    }
}

impl Config {
    fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("bms").required(false))
            .add_source(config::Environment::with_prefix("BMS"))
            .build()?
            .try_deserialize()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|error| {
        tracing::warn!(%error, "failed to load configuration, falling back to defaults");
        Config::default()
    })
});
