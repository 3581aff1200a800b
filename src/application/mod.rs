//! Application layer - Use cases and orchestration

pub mod manage_config;
pub mod notes;

pub use manage_config::ConfigService;
pub use notes::NoteService;
