//! Interactive numbered menu

use crate::application::NoteService;
use crate::cli::output::{format_note, format_note_list};
use crate::domain::SortKey;
use crate::error::{NotesError, Result};
use crate::infrastructure::NoteStore;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\nChoose an action:\n\
    1. View all notes\n\
    2. Add a note\n\
    3. Edit a note\n\
    4. Delete a note\n\
    5. Search notes\n\
    6. Sort notes\n\
    7. Export notes to CSV\n\
    8. Show note by ID\n\
    9. Exit\n";

/// Line-oriented menu loop over a [`NoteService`]
pub struct Shell<'a, S: NoteStore, R: BufRead, W: Write> {
    service: &'a mut NoteService<S>,
    input: R,
    output: W,
}

impl<'a, S: NoteStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(service: &'a mut NoteService<S>, input: R, output: W) -> Self {
        Shell {
            service,
            input,
            output,
        }
    }

    /// Run until the exit choice or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter action number: ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.view_all()?,
                "2" => self.add()?,
                "3" => self.edit()?,
                "4" => self.delete()?,
                "5" => self.search()?,
                "6" => self.sort()?,
                "7" => self.export()?,
                "8" => self.show()?,
                "9" => break,
                other => {
                    log::debug!("Unknown menu choice {:?}", other);
                    writeln!(self.output, "Invalid choice. Try again.")?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Print `label` and read one line without its line ending.
    /// Returns None at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read several fields in a row; None if input ends part way
    fn prompt_all<const N: usize>(&mut self, labels: [&str; N]) -> Result<Option<[String; N]>> {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (value, label) in values.iter_mut().zip(labels) {
            match self.prompt(label)? {
                Some(line) => *value = line,
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }

    fn view_all(&mut self) -> Result<()> {
        if self.service.notes().is_empty() {
            writeln!(self.output, "No notes saved.")?;
        } else {
            write!(self.output, "{}", format_note_list(self.service.notes()))?;
        }
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some([id, title, body]) =
            self.prompt_all(["Enter new note ID: ", "Enter title: ", "Enter note text: "])?
        else {
            return Ok(());
        };

        self.service.add(&id, &title, &body)?;
        writeln!(self.output, "Note added.")?;
        Ok(())
    }

    fn edit(&mut self) -> Result<()> {
        let Some([id, title, body]) = self.prompt_all([
            "Enter ID of the note to edit: ",
            "Enter new title: ",
            "Enter new note text: ",
        ])?
        else {
            return Ok(());
        };

        if self.service.edit(&id, &title, &body)? {
            writeln!(self.output, "Note updated.")?;
        } else {
            writeln!(self.output, "No note with ID '{}'; nothing changed.", id)?;
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some([id]) = self.prompt_all(["Enter ID of the note to delete: "])? else {
            return Ok(());
        };

        match self.service.delete(&id)? {
            0 => writeln!(self.output, "No note with ID '{}'; nothing changed.", id)?,
            1 => writeln!(self.output, "Note deleted.")?,
            n => writeln!(self.output, "{} notes deleted.", n)?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let Some([query]) = self.prompt_all(["Enter text to search for: "])? else {
            return Ok(());
        };

        let found = self.service.search(&query);
        if found.is_empty() {
            writeln!(self.output, "No notes match your query.")?;
        } else {
            write!(self.output, "{}", format_note_list(found))?;
        }
        Ok(())
    }

    fn sort(&mut self) -> Result<()> {
        let Some([choice]) = self.prompt_all(["Sort by (1 - date, 2 - title): "])? else {
            return Ok(());
        };

        // Only the menu numbers are accepted here
        let key = match choice.trim() {
            "1" | "2" => SortKey::from_str(&choice)?,
            _ => {
                writeln!(self.output, "Invalid choice.")?;
                return Ok(());
            }
        };

        write!(self.output, "{}", format_note_list(self.service.sorted(key)))?;
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let rows = self.service.export(None)?;
        writeln!(
            self.output,
            "Exported {} notes to {}.",
            rows,
            self.service.exporter().path().display()
        )?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let Some([id]) = self.prompt_all(["Enter ID of the note to show: "])? else {
            return Ok(());
        };

        match self.service.show(&id) {
            Ok(note) => write!(self.output, "{}", format_note(note))?,
            Err(NotesError::NotFound(_)) => {
                writeln!(self.output, "No note with ID '{}' was found.", id)?
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use crate::infrastructure::{CsvExporter, MemoryStore};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn seeded() -> MemoryStore {
        MemoryStore::with_notes(vec![
            Note::new("1", "B", "second", "2024-01-02 00:00:00"),
            Note::new("2", "A", "first", "2024-01-01 00:00:00"),
        ])
    }

    fn run(service: &mut NoteService<MemoryStore>, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(service, Cursor::new(input.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn open(store: MemoryStore, temp: &TempDir) -> NoteService<MemoryStore> {
        NoteService::open(store, CsvExporter::new(temp.path().join("notes.csv"))).unwrap()
    }

    #[test]
    fn test_exit_choice() {
        let temp = TempDir::new().unwrap();
        let mut service = open(MemoryStore::new(), &temp);

        let output = run(&mut service, "9\n");
        assert!(output.contains("1. View all notes"));
        assert!(output.contains("9. Exit"));
        assert_eq!(service.store().save_count(), 0);
    }

    #[test]
    fn test_end_of_input_exits() {
        let temp = TempDir::new().unwrap();
        let mut service = open(MemoryStore::new(), &temp);

        let output = run(&mut service, "");
        assert_eq!(output.matches("Choose an action").count(), 1);
    }

    #[test]
    fn test_view_empty() {
        let temp = TempDir::new().unwrap();
        let mut service = open(MemoryStore::new(), &temp);

        let output = run(&mut service, "1\n9\n");
        assert!(output.contains("No notes saved."));
    }

    #[test]
    fn test_add_then_view() {
        let temp = TempDir::new().unwrap();
        let mut service = open(MemoryStore::new(), &temp);

        let output = run(&mut service, "2\n1\nHello\nWorld\n1\n9\n");

        assert!(output.contains("Note added."));
        assert!(output.contains("ID: 1, Title: Hello"));
        assert!(output.contains("Body: World"));
        assert_eq!(service.store().save_count(), 1);
        assert_eq!(service.store().snapshot().unwrap()[0].title(), "Hello");
    }

    #[test]
    fn test_add_keeps_inner_whitespace() {
        let temp = TempDir::new().unwrap();
        let mut service = open(MemoryStore::new(), &temp);

        run(&mut service, "2\n 7 \n  spaced title\nbody\r\n9\n");

        let note = &service.notes()[0];
        assert_eq!(note.id(), " 7 ");
        assert_eq!(note.title(), "  spaced title");
        assert_eq!(note.body(), "body");
    }

    #[test]
    fn test_add_interrupted_by_end_of_input() {
        let temp = TempDir::new().unwrap();
        let mut service = open(MemoryStore::new(), &temp);

        run(&mut service, "2\n1\nHello\n");

        assert!(service.notes().is_empty());
        assert_eq!(service.store().save_count(), 0);
    }

    #[test]
    fn test_edit_reports_result_and_saves() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "3\n2\nA2\nnew\n3\nzz\nT\nB\n9\n");

        assert!(output.contains("Note updated."));
        assert!(output.contains("No note with ID 'zz'; nothing changed."));
        assert_eq!(service.notes()[1].title(), "A2");
        assert_eq!(service.store().save_count(), 2);
    }

    #[test]
    fn test_delete() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "4\n1\n4\n1\n9\n");

        assert!(output.contains("Note deleted."));
        assert!(output.contains("No note with ID '1'; nothing changed."));
        assert_eq!(service.notes().len(), 1);
        assert_eq!(service.store().save_count(), 2);
    }

    #[test]
    fn test_search() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "5\nfirst\n5\nnothing\n9\n");

        assert!(output.contains("ID: 2, Title: A"));
        assert!(!output.contains("ID: 1, Title: B"));
        assert!(output.contains("No notes match your query."));
    }

    #[test]
    fn test_sort_by_title_does_not_reorder_store() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "6\n2\n9\n");

        let a = output.find("ID: 2, Title: A").unwrap();
        let b = output.find("ID: 1, Title: B").unwrap();
        assert!(a < b);
        assert_eq!(service.notes()[0].id(), "1");
        assert_eq!(service.store().save_count(), 0);
    }

    #[test]
    fn test_sort_invalid_choice() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "6\ntitle\n9\n");
        assert!(output.contains("Invalid choice."));
        assert!(!output.contains("ID: "));
    }

    #[test]
    fn test_export() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "7\n9\n");

        assert!(output.contains("Exported 2 notes"));
        let content = fs::read_to_string(temp.path().join("notes.csv")).unwrap();
        assert!(content.starts_with("ID;Title;Body;Timestamp\n1;B;"));
    }

    #[test]
    fn test_show_found_and_missing() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "8\n2\n8\nmissing\n9\n");

        assert!(output.contains("ID: 2, Title: A\nBody: first\nCreated: 2024-01-01 00:00:00"));
        assert!(output.contains("No note with ID 'missing' was found."));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let temp = TempDir::new().unwrap();
        let mut service = open(seeded(), &temp);

        let output = run(&mut service, "42\n9\n");
        assert!(output.contains("Invalid choice. Try again."));
        assert_eq!(output.matches("Choose an action").count(), 2);
    }
}
