//! User configuration stored in `~/.shapecalc/config.toml`
//!
//! All fields are optional with defaults, so a missing or partial file
//! still loads.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Configuration for shapecalc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the key/value documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Storage key of the calculation history document
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Storage key of the last submitted form input
    #[serde(default = "default_last_input_key")]
    pub last_input_key: String,
}

fn default_data_dir() -> PathBuf {
    paths::data_dir()
}
fn default_storage_key() -> String {
    "calculations".to_string()
}
fn default_last_input_key() -> String {
    "shapeInputs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            last_input_key: default_last_input_key(),
        }
    }
}

impl Config {
    /// Load configuration from the user-level config file
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Load configuration from an explicit path
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}
