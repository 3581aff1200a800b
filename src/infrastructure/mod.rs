//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export;
pub mod storage;

pub use config::{Config, CONFIG_FILE_NAME};
pub use export::{write_csv, CsvExporter};
pub use storage::{JsonFileStore, MemoryStore, NoteStore};
