use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/monitor";

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorConfig {
    pub backend: BackendSettings,
    pub polling: PollingSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub origin: String,
    pub api_prefix: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    pub interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl BackendSettings {
    fn origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }

    /// Data endpoints live under the API prefix.
    pub fn api_url(&self, path: &str) -> String {
        let prefix = self.api_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", self.origin(), path)
        } else {
            format!("{}/{}/{}", self.origin(), prefix, path)
        }
    }

    /// Health is rooted at the bare origin, outside the API prefix.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.origin())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl PollingSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

pub fn load_monitor_config() -> anyhow::Result<MonitorConfig> {
    load_monitor_config_from(DEFAULT_CONFIG_PATH)
}

/// Defaults, then the optional file at `path`, then `VAULT_MONITOR__*` env vars.
pub fn load_monitor_config_from(path: &str) -> anyhow::Result<MonitorConfig> {
    let settings = config::Config::builder()
        .set_default("backend.origin", "http://localhost:8000")?
        .set_default("backend.api_prefix", "/api/v1")?
        .set_default("backend.timeout_ms", 10_000_i64)?
        .set_default("polling.interval_secs", 30_i64)?
        .set_default("server.bind", "127.0.0.1:8090")?
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("VAULT_MONITOR").separator("__"))
        .build()?;

    let config: MonitorConfig = settings.try_deserialize()?;
    if config.polling.interval_secs == 0 {
        anyhow::bail!("polling.interval_secs must be greater than zero");
    }
    Ok(config)
}
