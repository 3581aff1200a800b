//! Output formatting utilities

use crate::domain::Note;

/// Format a single note for display
pub fn format_note(note: &Note) -> String {
    format!(
        "ID: {}, Title: {}\nBody: {}\nCreated: {}\n",
        note.id(),
        note.title(),
        note.body(),
        note.timestamp()
    )
}

/// Format notes for display, one block each, in the given order
pub fn format_note_list<'a, I>(notes: I) -> String
where
    I: IntoIterator<Item = &'a Note>,
{
    notes.into_iter().map(format_note).collect()
}
