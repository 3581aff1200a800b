//! Note value type

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format used for note creation timestamps (`YYYY-MM-DD HH:MM:SS`).
///
/// Lexicographic order of strings in this format matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single user-authored note.
///
/// Notes are values: editing produces a new `Note` that keeps the original
/// `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    id: String,
    title: String,
    body: String,
    timestamp: String,
}

impl Note {
    /// Create a note from all four fields, as stored on disk
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Note {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Create a note stamped with the given creation time
    pub fn created_at(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        created: NaiveDateTime,
    ) -> Self {
        Note::new(id, title, body, format_timestamp(created))
    }

    /// Create a note stamped with the current local time
    pub fn created_now(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Note::created_at(id, title, body, Local::now().naive_local())
    }

    /// Copy of this note with new title and body; id and timestamp are kept
    pub fn with_content(&self, title: impl Into<String>, body: impl Into<String>) -> Self {
        Note {
            id: self.id.clone(),
            title: title.into(),
            body: body.into(),
            timestamp: self.timestamp.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// True if `query` occurs in the title or the body (case-sensitive)
    pub fn mentions(&self, query: &str) -> bool {
        self.title.contains(query) || self.body.contains(query)
    }
}

/// Render a creation time in [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
