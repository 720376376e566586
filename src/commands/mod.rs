pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod last;
pub mod list;

use anyhow::{Context, Result};
use shapecalc::{Config, History};

/// Open the history configured in `~/.shapecalc/config.toml`
pub fn open_history() -> Result<History> {
    let config = Config::load()?;
    History::open(&config).with_context(|| {
        format!(
            "Failed to open calculation history in {}",
            config.data_dir.display()
        )
    })
}
