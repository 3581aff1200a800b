//! CSV export of notes

use crate::domain::Note;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header row of every export
pub const CSV_HEADER: [&str; 4] = ["ID", "Title", "Body", "Timestamp"];

const DELIMITER: u8 = b';';

/// Writes notes to a semicolon-delimited file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: PathBuf) -> Self {
        CsvExporter { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Export `notes` in the given order, replacing any previous export.
    /// Returns the number of rows written (header excluded).
    pub fn export<'a, I>(&self, notes: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Note>,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(&self.path)?;
        let rows = write_csv(file, notes)?;

        log::info!("Exported {} notes to {}", rows, self.path.display());
        Ok(rows)
    }
}

/// Write the header and one row per note to `writer`
pub fn write_csv<'a, W, I>(writer: W, notes: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Note>,
{
    let mut csv = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for note in notes {
        csv.write_record([note.id(), note.title(), note.body(), note.timestamp()])?;
        rows += 1;
    }

    csv.flush()?;
    Ok(rows)
}
