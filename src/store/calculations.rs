//! Calculation history persistence
//!
//! The whole collection lives under one key and is replaced on every write.
//! Reads fail soft: a missing or corrupt document loads as an empty history.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::backend::StorageBackend;
use crate::record::{CalculationCollection, CalculationRecord, LastInput};

/// Load/save primitives for the calculation collection
#[derive(Debug)]
pub struct CalculationStore {
    backend: StorageBackend,
    key: String,
    last_input_key: String,
}

impl CalculationStore {
    pub fn new(
        backend: StorageBackend,
        key: impl Into<String>,
        last_input_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            key: key.into(),
            last_input_key: last_input_key.into(),
        }
    }

    pub fn backend(&self) -> &StorageBackend {
        &self.backend
    }

    /// Read the persisted collection
    ///
    /// Never fails: an absent, unreadable or unparseable document yields an
    /// empty collection.
    pub fn load(&self) -> CalculationCollection {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, "failed to read calculations, starting empty: {e:#}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<CalculationCollection>(&raw) {
            Ok(records) => {
                debug!(key = %self.key, count = records.len(), "loaded calculations");
                records
            }
            Err(e) => {
                warn!(key = %self.key, "corrupt calculations document, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Serialize and overwrite the persisted collection
    pub fn save(&mut self, records: &[CalculationRecord]) -> Result<()> {
        let json = serde_json::to_string(records).context("Failed to serialize calculations")?;
        self.backend
            .set(&self.key, &json)
            .with_context(|| format!("Failed to save calculations under '{}'", self.key))?;
        debug!(key = %self.key, count = records.len(), "saved calculations");
        Ok(())
    }

    /// Remember the last submitted form input
    pub fn save_last_input(&mut self, input: &LastInput) -> Result<()> {
        let json = serde_json::to_string(input)?;
        self.backend.set(&self.last_input_key, &json)
    }

    /// Recall the last submitted form input, if one was stored and still parses
    pub fn load_last_input(&self) -> Option<LastInput> {
        let raw = match self.backend.get(&self.last_input_key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %self.last_input_key, "failed to read last input: {e:#}");
                return None;
            }
        };

        serde_json::from_str(&raw)
            .map_err(|e| warn!(key = %self.last_input_key, "ignoring corrupt last input: {e}"))
            .ok()
    }
}
