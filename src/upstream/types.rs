use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// ================================
/// Feishu open-api wire shapes
/// ================================

/// Response of POST /auth/v3/app_access_token/internal
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub code: i64,
    #[serde(default)]
    pub app_access_token: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Response of GET /bitable/v1/apps/{base}/tables/{table}/records
#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    pub code: i64,
    #[serde(default)]
    pub data: Option<RecordsData>,
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RecordsData {
    #[serde(default)]
    pub items: Vec<RawRecord>,
}

impl RecordsResponse {
    /// Pull the item list out of the nested payload, tolerating absent
    /// nesting levels.
    pub fn into_items(self) -> Vec<RawRecord> {
        self.data.map(|d| d.items).unwrap_or_default()
    }
}

/// One bitable row as the upstream returns it. Field names are the
/// table's column labels and are not guaranteed stable across schema
/// edits, so values stay opaque JSON until normalization.
#[derive(Debug, Deserialize, Clone)]
pub struct RawRecord {
    #[serde(default)]
    pub record_id: String,
    /// Milliseconds since the epoch; absent on some rows.
    #[serde(default)]
    pub created_time: Option<i64>,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}
