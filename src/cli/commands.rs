//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quicknote")]
#[command(about = "Personal note manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: quicknote.toml in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Notes store file, overrides the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// CSV export file, overrides the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Without a command the interactive menu is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu
    Shell,

    /// Show all notes
    List {
        /// Sort by date or title instead of stored order
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Add a new note
    Add { id: String, title: String, body: String },

    /// Replace the title and body of the first note with ID
    Edit { id: String, title: String, body: String },

    /// Delete every note with ID
    Delete { id: String },

    /// Show notes whose title or body contains QUERY (case-sensitive)
    Search { query: String },

    /// Show the first note with ID
    Show { id: String },

    /// Export notes to CSV
    Export {
        /// Sort by date or title instead of stored order
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
