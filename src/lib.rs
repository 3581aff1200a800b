//! quicknote - Personal note manager
//!
//! Keeps short text notes in a local JSON file, with search, sorting and
//! CSV export, driven from an interactive menu or single commands.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NotesError;
