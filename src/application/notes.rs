//! Note management use cases

use crate::domain::{Note, Notebook, SortKey};
use crate::error::{NotesError, Result};
use crate::infrastructure::{CsvExporter, NoteStore};

/// Service owning the notebook for the lifetime of a session.
///
/// The store is read once on open and written in full after every
/// add, edit or delete.
pub struct NoteService<S: NoteStore> {
    store: S,
    exporter: CsvExporter,
    notebook: Notebook,
}

impl<S: NoteStore> NoteService<S> {
    /// Load the stored notes and start a session
    pub fn open(store: S, exporter: CsvExporter) -> Result<Self> {
        let notebook = Notebook::from_notes(store.load()?);
        Ok(NoteService {
            store,
            exporter,
            notebook,
        })
    }

    pub fn notes(&self) -> &[Note] {
        self.notebook.notes()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn exporter(&self) -> &CsvExporter {
        &self.exporter
    }

    /// Add a note and persist
    pub fn add(&mut self, id: &str, title: &str, body: &str) -> Result<Note> {
        let note = self.notebook.add(id, title, body).clone();
        self.persist()?;
        log::info!("Added note '{}'", id);
        Ok(note)
    }

    /// Edit the first note with `id` and persist.
    /// Returns false when no note matched; the store is still rewritten.
    pub fn edit(&mut self, id: &str, title: &str, body: &str) -> Result<bool> {
        let edited = self.notebook.edit(id, title, body);
        self.persist()?;
        if edited {
            log::info!("Edited note '{}'", id);
        } else {
            log::debug!("Edit skipped, no note '{}'", id);
        }
        Ok(edited)
    }

    /// Delete every note with `id` and persist. Returns the number removed.
    pub fn delete(&mut self, id: &str) -> Result<usize> {
        let removed = self.notebook.delete(id);
        self.persist()?;
        log::info!("Deleted {} note(s) with id '{}'", removed, id);
        Ok(removed)
    }

    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notebook.search(query)
    }

    /// Sorted view; the stored order is not changed
    pub fn sorted(&self, key: SortKey) -> Vec<&Note> {
        self.notebook.sorted(key)
    }

    /// First note with `id`
    pub fn show(&self, id: &str) -> Result<&Note> {
        self.notebook
            .find(id)
            .ok_or_else(|| NotesError::NotFound(id.to_string()))
    }

    /// Export to CSV in current order, or sorted by `key`
    pub fn export(&self, key: Option<SortKey>) -> Result<usize> {
        match key {
            Some(key) => self.exporter.export(self.notebook.sorted(key)),
            None => self.exporter.export(self.notebook.notes()),
        }
    }

    fn persist(&self) -> Result<()> {
        self.store.save(self.notebook.notes())
    }
}
