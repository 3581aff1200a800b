//! Error types for quicknote

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quicknote
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupted notes store {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl NotesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotesError::Deserialize { .. } => 2,
            NotesError::Config(_)
            | NotesError::InvalidSortKey(_)
            | NotesError::TomlSerialize(_) => 3,
            NotesError::NotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotesError::NotFound(id) => {
                format!(
                    "No note with ID '{}' was found.\n\n\
                    Suggestions:\n\
                    • IDs are matched exactly (case-sensitive)\n\
                    • Use 'quicknote list' to see stored notes\n\
                    • Use 'quicknote search <text>' to find a note by content",
                    id
                )
            }
            NotesError::Deserialize { path, source } => {
                format!(
                    "Notes store {} could not be read: {}\n\n\
                    Suggestions:\n\
                    • Every record needs string fields: id, title, body, timestamp\n\
                    • Fix or move the file aside; a missing store starts empty\n\
                    • Point to another store: quicknote --store other.json",
                    path.display(),
                    source
                )
            }
            NotesError::InvalidSortKey(key) => {
                format!(
                    "Invalid sort key: '{}'\n\n\
                    Valid sort keys: date, title\n\
                    Example: quicknote list --sort title",
                    key
                )
            }
            NotesError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: quicknote config store_path ~/notes.json",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotesError
pub type Result<T> = std::result::Result<T, NotesError>;
