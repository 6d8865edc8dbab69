use anyhow::{bail, Result};
use clap::Parser;
use tracing::warn;

use crate::config::settings::{LogFormat, LoggingConfig, MetricsConfig, ServerConfig, Settings};
use crate::utils::constants::{DEFAULT_API_BASE, DEFAULT_CACHE_TTL_SECS, DEV_SECRET_KEY};
use crate::utils::logging::LogLevel;

/// Environment-backed command line. Every value can also come from the
/// deployment environment, which is how production runs it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "FEISHU_APP_ID", default_value = "", hide_env_values = true)]
    pub app_id: String,
    #[arg(long, env = "FEISHU_APP_SECRET", default_value = "", hide_env_values = true)]
    pub app_secret: String,
    #[arg(long, env = "BASE_ID", default_value = "")]
    pub base_id: String,
    #[arg(long, env = "TABLE_ID", default_value = "")]
    pub table_id: String,
    #[arg(long, env = "FEISHU_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
    /// Cache time-to-live in seconds
    #[arg(long, env = "CACHE_TIME", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_time: u64,
    #[arg(long, env = "DEBUG", default_value_t = false)]
    pub debug: bool,
    #[arg(long, env = "SECRET_KEY", default_value = DEV_SECRET_KEY, hide_env_values = true)]
    pub secret_key: String,
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: String,
    #[arg(long, env = "METRICS_ENABLED", default_value_t = true)]
    pub metrics_enabled: bool,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    pub log_level: Option<LogLevel>,
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Build validated settings from the parsed arguments.
pub fn build(args: &Args) -> Result<Settings> {
    if args.cache_time == 0 {
        bail!("CACHE_TIME must be a positive number of seconds");
    }
    // the cache does signed second arithmetic on the ttl
    if args.cache_time > i64::MAX as u64 {
        bail!("CACHE_TIME {} is out of range", args.cache_time);
    }
    if args.port.parse::<u16>().is_err() {
        bail!("PORT '{}' is not a valid port number", args.port);
    }

    Ok(Settings {
        app_id: args.app_id.trim().to_string(),
        app_secret: args.app_secret.trim().to_string(),
        base_id: args.base_id.trim().to_string(),
        table_id: args.table_id.trim().to_string(),
        api_base: args.api_base.trim_end_matches('/').to_string(),
        cache_ttl_secs: args.cache_time,
        debug: args.debug,
        secret_key: args.secret_key.clone(),
        server: ServerConfig {
            host: args.host.clone(),
            port: args.port.clone(),
        },
        metrics: MetricsConfig {
            path: "/metrics".to_string(),
            is_enabled: args.metrics_enabled,
        },
        logging: LoggingConfig {
            level: if args.debug { "debug".into() } else { "info".into() },
            format: args.log_format.clone().unwrap_or(LogFormat::Compact),
        },
    })
}

/// Emit startup warnings for degraded configurations. Missing
/// credentials are not fatal: the blog serves an empty list instead
/// of refusing to start.
pub fn report_startup_state(settings: &Settings) {
    if !settings.has_credentials() {
        warn!("FEISHU_APP_ID / FEISHU_APP_SECRET not set; every page will render empty");
    }
    if !settings.has_table() {
        warn!("BASE_ID / TABLE_ID not set; every page will render empty");
    }
    if !settings.debug && settings.secret_key == DEV_SECRET_KEY {
        warn!("SECRET_KEY is still the development default");
    }
}
