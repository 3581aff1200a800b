//! Domain layer - Notes and the operations on them

pub mod note;
pub mod notebook;
pub mod sort;

pub use note::{format_timestamp, Note, TIMESTAMP_FORMAT};
pub use notebook::Notebook;
pub use sort::SortKey;
