//! Single source of truth for the shapecalc filesystem layout.
//!
//! This module defines WHERE data lives. It has no I/O, no validation,
//! no business logic. One file shows the entire filesystem layout.
//!
//! ```text
//! ~/.shapecalc/                # or $SHAPECALC_HOME
//! ├── config.toml              # User config
//! └── data/                    # Key/value documents
//!     ├── calculations.json    # Calculation history
//!     └── shapeInputs.json     # Last submitted form input
//! ```

use std::path::{Path, PathBuf};

/// Environment variable that relocates the whole layout (tests, portable installs).
pub const HOME_ENV_VAR: &str = "SHAPECALC_HOME";

/// shapecalc home directory: `$SHAPECALC_HOME` or `~/.shapecalc/`
pub fn shapecalc_home() -> PathBuf {
    if let Ok(home) = std::env::var(HOME_ENV_VAR) {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shapecalc")
}

/// Config file: `~/.shapecalc/config.toml`
pub fn config_path() -> PathBuf {
    config_path_in(&shapecalc_home())
}

/// Config file under an explicit home directory
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join("config.toml")
}

/// Default data directory: `~/.shapecalc/data/`
pub fn data_dir() -> PathBuf {
    data_dir_in(&shapecalc_home())
}

/// Data directory under an explicit home directory
pub fn data_dir_in(home: &Path) -> PathBuf {
    home.join("data")
}

/// File backing one storage key: `{data_dir}/{key}.json`
pub fn key_file(data_dir: &Path, key: &str) -> PathBuf {
    data_dir.join(format!("{key}.json"))
}
