//! In-memory note collection and its operations

use crate::domain::{Note, SortKey};
use chrono::NaiveDateTime;

/// Ordered collection of notes.
///
/// Insertion order is kept; sorting returns a view and never reorders the
/// collection itself. Ids are not required to be unique: `edit` and `find`
/// act on the first match while `delete` removes every match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Notebook::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Notebook { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note stamped with the current local time
    pub fn add(&mut self, id: &str, title: &str, body: &str) -> &Note {
        self.push(Note::created_now(id, title, body))
    }

    /// Append a note stamped with `created`
    pub fn add_at(&mut self, id: &str, title: &str, body: &str, created: NaiveDateTime) -> &Note {
        self.push(Note::created_at(id, title, body, created))
    }

    fn push(&mut self, note: Note) -> &Note {
        self.notes.push(note);
        &self.notes[self.notes.len() - 1]
    }

    /// Replace title and body of the first note with `id`.
    /// Returns false (and changes nothing) when no note matches.
    pub fn edit(&mut self, id: &str, title: &str, body: &str) -> bool {
        match self.notes.iter().position(|n| n.id() == id) {
            Some(index) => {
                self.notes[index] = self.notes[index].with_content(title, body);
                true
            }
            None => false,
        }
    }

    /// Remove every note with `id`, returning how many were removed
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.notes.len();
        self.notes.retain(|n| n.id() != id);
        before - self.notes.len()
    }

    /// Notes whose title or body contains `query`, in collection order
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.mentions(query)).collect()
    }

    /// Stable ascending sort by creation timestamp
    pub fn sorted_by_date(&self) -> Vec<&Note> {
        let mut view: Vec<&Note> = self.notes.iter().collect();
        view.sort_by(|a, b| a.timestamp().cmp(b.timestamp()));
        view
    }

    /// Stable ascending sort by title
    pub fn sorted_by_title(&self) -> Vec<&Note> {
        let mut view: Vec<&Note> = self.notes.iter().collect();
        view.sort_by(|a, b| a.title().cmp(b.title()));
        view
    }

    pub fn sorted(&self, key: SortKey) -> Vec<&Note> {
        match key {
            SortKey::Date => self.sorted_by_date(),
            SortKey::Title => self.sorted_by_title(),
        }
    }

    /// First note with `id`
    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }
}
