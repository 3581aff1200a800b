//! Config management use case

use crate::error::{NotesError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and editing the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a config service for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.list()?;

        match key {
            "store_path" => Ok(config.store_path.display().to_string()),
            "export_path" => Ok(config.export_path.display().to_string()),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a config value, creating the config file if needed
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.list()?;

        if value.trim().is_empty() {
            return Err(NotesError::Config(format!("Value for '{}' cannot be empty", key)));
        }

        match key {
            "store_path" => config.store_path = PathBuf::from(value),
            "export_path" => config.export_path = PathBuf::from(value),
            _ => return Err(Self::unknown_key(key)),
        }

        config.save_to_file(&self.path)?;
        log::info!("Set {} in {}", key, self.path.display());
        Ok(())
    }

    /// Current configuration (defaults when no file exists)
    pub fn list(&self) -> Result<Config> {
        Config::load_or_default(&self.path)
    }

    fn unknown_key(key: &str) -> NotesError {
        NotesError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: store_path, export_path",
            key
        ))
    }
}
