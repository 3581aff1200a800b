//! Configuration management

use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "quicknote.toml";

const DEFAULT_STORE_PATH: &str = "notes.json";
const DEFAULT_EXPORT_PATH: &str = "notes.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON file holding every note
    pub store_path: PathBuf,
    /// Destination of the CSV export
    pub export_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotesError::Config(format!("Config file not found: {}", path.display()))
            } else {
                NotesError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            NotesError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load config from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Save config as TOML
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, store: Option<PathBuf>, export: Option<PathBuf>) -> Self {
        if let Some(store) = store {
            self.store_path = store;
        }
        if let Some(export) = export {
            self.export_path = export;
        }
        self
    }
}
