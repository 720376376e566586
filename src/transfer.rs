//! Export and import of the calculation history as a JSON file
//!
//! Export writes the full collection pretty-printed. Import accepts
//! arbitrary bytes, and merges only when they hold a JSON array of
//! record-shaped values; anything else leaves the existing history alone.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::record::{CalculationCollection, CalculationRecord};

/// Reason an imported document was rejected
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Import file must contain a JSON array of calculations")]
    NotArray,
    #[error("Entry {index} in the import file is not a calculation: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialize the full collection as a pretty-printed JSON document
pub fn export(records: &[CalculationRecord]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(records).context("Failed to serialize calculations for export")
}

/// Export file name for a date: `shape-calculations-YYYY-MM-DD.json`
pub fn export_filename(date: NaiveDate) -> String {
    format!("shape-calculations-{}.json", date.format("%Y-%m-%d"))
}

/// Write an export file named after today's local date into `dir`
pub fn export_to_dir(records: &[CalculationRecord], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(export_filename(chrono::Local::now().date_naive()));
    fs::write(&path, export(records)?)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    info!(path = %path.display(), count = records.len(), "exported calculations");
    Ok(path)
}

/// Parse an external document into records, rejecting anything that is not
/// an array of record-shaped values
pub fn parse_document(document: &[u8]) -> Result<CalculationCollection, ImportError> {
    let value: Value = serde_json::from_slice(document).map_err(ImportError::Parse)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| ImportError::Record { index, source })
        })
        .collect()
}

/// Merge an external document after the existing records
///
/// Imported records are appended as-is: no de-duplication by id and no
/// re-validation of field values.
pub fn try_import(
    document: &[u8],
    existing: &[CalculationRecord],
) -> Result<CalculationCollection, ImportError> {
    let imported = parse_document(document)?;

    let mut merged = Vec::with_capacity(existing.len() + imported.len());
    merged.extend_from_slice(existing);
    merged.extend(imported);
    Ok(merged)
}

/// Merge an external document, reporting success as a flag
///
/// On failure the returned collection is a copy of `existing`.
pub fn import(document: &[u8], existing: &[CalculationRecord]) -> (CalculationCollection, bool) {
    match try_import(document, existing) {
        Ok(merged) => (merged, true),
        Err(e) => {
            warn!("import rejected: {e}");
            (existing.to_vec(), false)
        }
    }
}
