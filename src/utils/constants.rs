//! Shared constants and invariants

/// Success sentinel in every Feishu open-api response body.
pub const FEISHU_OK_CODE: i64 = 0;

pub const DEFAULT_API_BASE: &str = "https://open.feishu.cn/open-apis";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Preview length on the index page, counted in characters.
pub const PREVIEW_MAX_CHARS: usize = 100;

// Bitable column labels. The table is authored in Chinese; these are
// the literal field names the upstream returns.
pub const FIELD_TITLE: &str = "标题";
pub const FIELD_GOLDEN_SENTENCE: &str = "金句输出";
pub const FIELD_COMMENT: &str = "斯高特点评";
pub const FIELD_CONTENT: &str = "概要内容输出";

pub const DEV_SECRET_KEY: &str = "dev-key-change-this-in-production";
