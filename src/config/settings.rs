use clap::ValueEnum;
use serde::Deserialize;

/// ================================
/// Process-wide settings
/// ================================
///
/// Loaded once from the environment at startup and immutable for the
/// process lifetime. `app_secret` and `secret_key` must never be
/// logged; `Debug` is implemented by hand to redact them.
#[derive(Clone)]
pub struct Settings {
    pub app_id: String,
    pub app_secret: String,
    pub base_id: String,
    pub table_id: String,
    /// Feishu open-api root. Overridable so tests can point at a mock.
    pub api_base: String,
    pub cache_ttl_secs: u64,
    pub debug: bool,
    pub secret_key: String,
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
    pub logging: LoggingConfig,
}

impl Settings {
    pub fn has_credentials(&self) -> bool {
        !self.app_id.trim().is_empty() && !self.app_secret.trim().is_empty()
    }

    pub fn has_table(&self) -> bool {
        !self.base_id.trim().is_empty() && !self.table_id.trim().is_empty()
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("api_base", &self.api_base)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("debug", &self.debug)
            .field("secret_key", &"<redacted>")
            .field("server", &self.server)
            .field("metrics", &self.metrics)
            .field("logging", &self.logging)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_path")]
    pub path: String,
    #[serde(default)]
    pub is_enabled: bool,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}
