//! Note persistence

use crate::domain::Note;
use crate::error::{NotesError, Result};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-collection storage for notes
pub trait NoteStore {
    /// Load every stored note in stored order.
    /// A store that has never been written loads as empty.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the stored collection with `notes`
    fn save(&self, notes: &[Note]) -> Result<()>;
}

/// JSON file implementation of NoteStore
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write via a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.quicknote-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        let result = Self::replace_with(&tmp_path, &self.path, content);
        if result.is_err() {
            // A failed save must not leave its temp file next to the store
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn replace_with(tmp_path: &Path, path: &Path, content: &str) -> Result<()> {
        fs::write(tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(tmp_path, path)?;
        Ok(())
    }
}

impl NoteStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Note>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No notes store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(NotesError::Io(e)),
        };

        let notes: Vec<Note> =
            serde_json::from_slice(&contents).map_err(|source| NotesError::Deserialize {
                path: self.path.clone(),
                source,
            })?;

        log::debug!("Loaded {} notes from {}", notes.len(), self.path.display());
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(notes).map_err(NotesError::Serialize)?;
        contents.push('\n');

        self.write_atomic(&contents)?;

        log::debug!("Saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}

/// In-memory NoteStore, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RefCell<Option<Vec<Note>>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Store that already holds `notes`
    pub fn with_notes(notes: Vec<Note>) -> Self {
        MemoryStore {
            notes: RefCell::new(Some(notes)),
            saves: RefCell::new(0),
        }
    }

    /// Last saved collection, if anything has been stored
    pub fn snapshot(&self) -> Option<Vec<Note>> {
        self.notes.borrow().clone()
    }

    /// Number of save calls so far
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl NoteStore for MemoryStore {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.notes.borrow().clone().unwrap_or_default())
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        *self.notes.borrow_mut() = Some(notes.to_vec());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
