//! Configuration for theatrebase

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Default storage directory
pub fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("theatrebase")
}

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the graph database
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Database file name inside `storage_dir`
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Maximum number of items returned by list-shape collections
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Tracing filter directive (overridden by RUST_LOG)
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_database_file() -> String {
    "theatrebase.db".to_string()
}

fn default_list_limit() -> usize {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            database_file: default_database_file(),
            list_limit: default_list_limit(),
            log_filter: None,
        }
    }
}

impl Config {
    /// Load config from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Save config to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get graph database path
    pub fn database_path(&self) -> PathBuf {
        self.storage_dir.join(&self.database_file)
    }

    /// Get config file path
    pub fn config_path(&self) -> PathBuf {
        self.storage_dir.join("config.toml")
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.database_file.trim().is_empty() {
            return Err(StoreError::Config("database_file must not be empty".into()));
        }
        if self.list_limit == 0 {
            return Err(StoreError::Config("list_limit must be at least 1".into()));
        }
        Ok(())
    }
}
