//! Sort orders for note listings

use crate::error::NotesError;
use std::fmt;
use std::str::FromStr;

/// Field a note listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Creation timestamp, oldest first
    #[default]
    Date,
    /// Title, case-sensitive lexicographic
    Title,
}

impl FromStr for SortKey {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "1" => Ok(SortKey::Date),
            "title" | "2" => Ok(SortKey::Title),
            _ => Err(NotesError::InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Title => write!(f, "title"),
        }
    }
}
