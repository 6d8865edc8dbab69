use serde::Serialize;

use crate::utils::constants::PREVIEW_MAX_CHARS;

/// Presentation-ready shape of one blog entry, distinct from the raw
/// upstream field mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: String,
    pub title: String,
    pub golden_sentence: String,
    pub comment: String,
    pub content: String,
    /// RFC 3339 creation time, or "" when the upstream row carries none.
    pub created_time: String,
    /// Derived per call by the facade; cached entries keep it empty.
    pub preview: String,
}

impl DisplayRecord {
    /// A record earns display only if some text survives trimming.
    pub fn has_text(&self) -> bool {
        [&self.title, &self.golden_sentence, &self.comment, &self.content]
            .iter()
            .any(|s| !s.is_empty())
    }

    /// Copy with the index-page preview filled in.
    pub fn with_preview(&self) -> DisplayRecord {
        let mut record = self.clone();
        record.preview = preview_of(&self.content);
        record
    }
}

/// Bounded preview for the index page: the first
/// [`PREVIEW_MAX_CHARS`] characters, trailing-trimmed, with an
/// ellipsis marker when truncated. Counts characters, not bytes — the
/// content is mostly CJK.
pub fn preview_of(content: &str) -> String {
    if content.chars().count() <= PREVIEW_MAX_CHARS {
        return content.to_string();
    }

    let truncated: String = content.chars().take(PREVIEW_MAX_CHARS).collect();
    format!("{}...", truncated.trim_end())
}
