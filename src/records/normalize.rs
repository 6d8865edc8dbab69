use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::records::display::DisplayRecord;
use crate::upstream::types::RawRecord;
use crate::utils::constants::{
    FIELD_COMMENT, FIELD_CONTENT, FIELD_GOLDEN_SENTENCE, FIELD_TITLE,
};

/// Map raw bitable rows into the display schema. Pure: same input,
/// same output, no clock involved.
///
/// Rows whose four text columns are all empty after trimming are
/// dropped — the table accumulates decorative and half-filled rows.
/// Order is preserved as received.
pub fn normalize(raw: Vec<RawRecord>) -> Vec<DisplayRecord> {
    raw.into_iter().filter_map(normalize_one).collect()
}

fn normalize_one(raw: RawRecord) -> Option<DisplayRecord> {
    let record = DisplayRecord {
        id: raw.record_id,
        title: text_field(raw.fields.get(FIELD_TITLE)),
        golden_sentence: text_field(raw.fields.get(FIELD_GOLDEN_SENTENCE)),
        comment: text_field(raw.fields.get(FIELD_COMMENT)),
        content: text_field(raw.fields.get(FIELD_CONTENT)),
        created_time: created_time_rfc3339(raw.created_time),
        preview: String::new(),
    };

    record.has_text().then_some(record)
}

/// Extract a text column, trimming surrounding whitespace. Missing
/// columns and non-string values (the bitable can hold attachments,
/// numbers, selects) normalize to "".
fn text_field(value: Option<&Value>) -> String {
    value
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Millisecond epoch → RFC 3339. A missing or unrepresentable
/// timestamp becomes "" rather than "now", keeping normalization
/// deterministic across calls.
fn created_time_rfc3339(millis: Option<i64>) -> String {
    millis
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}
