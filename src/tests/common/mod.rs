// tests/common/mod.rs
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};

use crate::config::settings::{LogFormat, LoggingConfig, MetricsConfig, ServerConfig, Settings};
use crate::helpers::time::Clock;
use crate::utils::constants::DEV_SECRET_KEY;

/// Manually advanced clock so cache expiry does not need real sleeps.
pub struct FakeClock(AtomicI64);

impl FakeClock {
    pub fn new(start: i64) -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(start)))
    }

    pub fn advance(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_unix(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Settings pointing at a mock upstream, credentials filled in.
pub fn test_settings(api_base: &str) -> Settings {
    Settings {
        app_id: "cli_test_app".to_string(),
        app_secret: "test-secret".to_string(),
        base_id: "appBase123".to_string(),
        table_id: "tblXYZ".to_string(),
        api_base: api_base.trim_end_matches('/').to_string(),
        cache_ttl_secs: 300,
        debug: true,
        secret_key: DEV_SECRET_KEY.to_string(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: "0".to_string(),
        },
        metrics: MetricsConfig {
            path: "/metrics".to_string(),
            is_enabled: false,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Compact,
        },
    }
}

pub fn auth_ok_body() -> Value {
    json!({
        "code": 0,
        "msg": "ok",
        "app_access_token": "t-test-token",
        "expire": 7200
    })
}

pub fn records_ok_body(items: Value) -> Value {
    json!({
        "code": 0,
        "msg": "success",
        "data": { "items": items }
    })
}

/// One well-formed bitable row.
pub fn sample_item(id: &str, title: &str) -> Value {
    json!({
        "record_id": id,
        "created_time": 1714036800000i64,
        "fields": {
            "标题": title,
            "金句输出": "好记性不如烂笔头。",
            "斯高特点评": "a dry remark",
            "概要内容输出": "body text"
        }
    })
}
