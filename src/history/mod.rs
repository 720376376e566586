//! History module - create, edit and delete calculations
//!
//! Every mutation is a strict read-modify-write of the whole persisted
//! collection: load, change, save. Lookups by an unknown id are not errors;
//! they report `false` and leave storage untouched.
//!
//! # Example
//!
//! ```
//! use shapecalc::history::History;
//! use shapecalc::shape::ShapeParameters;
//!
//! let mut history = History::in_memory();
//! let record = history.calculate(ShapeParameters::Circle { radius: 2.0 }, "")?;
//! assert!(history.update_description(record.id, "pond")?);
//! assert!(history.delete_by_id(record.id)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::{ensure, Context, Result};
use chrono::Utc;
use tracing::{debug, info};

use crate::config::Config;
use crate::record::{CalculationCollection, CalculationRecord, LastInput};
use crate::shape::{ShapeKind, ShapeParameters};
use crate::store::{CalculationStore, StorageBackend};
use crate::transfer;

/// CRUD handle over the persisted calculation collection
#[derive(Debug)]
pub struct History {
    store: CalculationStore,
}

impl History {
    pub fn new(store: CalculationStore) -> Self {
        Self { store }
    }

    /// Open the file-backed history described by `config`
    pub fn open(config: &Config) -> Result<Self> {
        let backend = StorageBackend::open_file(&config.data_dir)?;
        Ok(Self::new(CalculationStore::new(
            backend,
            config.storage_key.as_str(),
            config.last_input_key.as_str(),
        )))
    }

    /// History that lives only as long as the process
    pub fn in_memory() -> Self {
        let defaults = Config::default();
        Self::new(CalculationStore::new(
            StorageBackend::in_memory(),
            defaults.storage_key,
            defaults.last_input_key,
        ))
    }

    pub fn store(&self) -> &CalculationStore {
        &self.store
    }

    /// Every stored record, in creation order
    pub fn all(&self) -> CalculationCollection {
        self.store.load()
    }

    /// First record carrying `id`
    pub fn get(&self, id: u64) -> Option<CalculationRecord> {
        self.store.load().into_iter().find(|record| record.id == id)
    }

    /// Append a new record and persist the collection
    ///
    /// `shape` and `area` are taken as already validated and computed; a
    /// non-finite `area` is refused since it cannot be stored as JSON.
    pub fn create(
        &mut self,
        shape_type: ShapeKind,
        shape: ShapeParameters,
        area: f64,
        description: &str,
    ) -> Result<CalculationRecord> {
        ensure!(
            area.is_finite(),
            "Area of {shape_type} is not a finite number; calculation not saved"
        );

        let mut records = self.store.load();
        let now = Utc::now();
        let id = internal::next_id(&records, now)
            .context("No calculation id left: history already holds the largest id")?;

        let record = CalculationRecord::new(id, shape_type, shape, area, description, now);
        records.push(record.clone());
        self.store.save(&records)?;

        info!(id, shape = %shape_type, area, "created calculation");
        Ok(record)
    }

    /// Compute the area of `shape` and record it
    pub fn calculate(
        &mut self,
        shape: ShapeParameters,
        description: &str,
    ) -> Result<CalculationRecord> {
        self.create(shape.kind(), shape, shape.area(), description)
    }

    /// Remove the first record carrying `id`
    ///
    /// Returns `false` without writing when no record matches.
    pub fn delete_by_id(&mut self, id: u64) -> Result<bool> {
        let mut records = self.store.load();
        let Some(index) = internal::position_of(&records, id) else {
            debug!(id, "delete: no such calculation");
            return Ok(false);
        };

        records.remove(index);
        self.store.save(&records)?;

        info!(id, "deleted calculation");
        Ok(true)
    }

    /// Replace the description of the first record carrying `id`
    ///
    /// Returns `false` without writing when no record matches.
    pub fn update_description(&mut self, id: u64, text: &str) -> Result<bool> {
        let mut records = self.store.load();
        let Some(index) = internal::position_of(&records, id) else {
            debug!(id, "update: no such calculation");
            return Ok(false);
        };

        records[index].description = text.to_string();
        self.store.save(&records)?;

        info!(id, "updated description");
        Ok(true)
    }

    /// Merge an external document into the stored history
    ///
    /// Returns the number of imported records. A rejected document surfaces
    /// as a [`transfer::ImportError`] and nothing is written.
    pub fn import_document(&mut self, document: &[u8]) -> Result<usize> {
        let existing = self.store.load();
        let merged = transfer::try_import(document, &existing)?;
        let imported = merged.len() - existing.len();

        self.store.save(&merged)?;
        info!(imported, total = merged.len(), "imported calculations");
        Ok(imported)
    }

    /// Remember the parameters of the last submitted form
    pub fn remember_input(&mut self, shape: ShapeParameters) -> Result<()> {
        self.store.save_last_input(&LastInput {
            shape_type: shape.kind(),
            parameters: shape,
        })
    }

    pub fn last_input(&self) -> Option<LastInput> {
        self.store.load_last_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::ImportError;
    use approx::assert_relative_eq;

    fn rect(width: f64, height: f64) -> ShapeParameters {
        ShapeParameters::Rectangle { width, height }
    }

    #[test]
    fn test_create_then_load() {
        let mut history = History::in_memory();
        let record = history
            .create(ShapeKind::Rectangle, rect(4.0, 5.0), 20.0, "deck")
            .unwrap();

        let stored = history.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], record);
        assert_eq!(stored[0].shape_type, ShapeKind::Rectangle);
        assert_eq!(stored[0].description, "deck");
        assert_eq!(stored[0].inputs, "Width: 4, Height: 5");
        assert_relative_eq!(stored[0].area, 20.0);
    }

    #[test]
    fn test_calculate_computes_area() {
        let mut history = History::in_memory();
        let record = history
            .calculate(ShapeParameters::Triangle { base: 6.0, height: 3.0 }, "")
            .unwrap();
        assert_eq!(record.shape_type, ShapeKind::Triangle);
        assert_relative_eq!(record.area, 9.0);
    }

    #[test]
    fn test_rapid_creates_get_increasing_ids() {
        let mut history = History::in_memory();
        let ids: Vec<u64> = (0..20)
            .map(|i| history.calculate(rect(1.0, i as f64 + 1.0), "").unwrap().id)
            .collect();

        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_overflowing_area_keeps_history() {
        let mut history = History::in_memory();
        history.calculate(ShapeParameters::Circle { radius: 1.0 }, "").unwrap();
        history.calculate(rect(2.0, 3.0), "").unwrap();

        let huge = rect(1e200, 1e200);
        assert!(history.calculate(huge, "").is_err());
        assert!(history
            .create(ShapeKind::Circle, ShapeParameters::Circle { radius: 1.0 }, f64::NAN, "")
            .is_err());

        history.calculate(ShapeParameters::Circle { radius: 2.0 }, "").unwrap();
        assert_eq!(history.all().len(), 3);
        assert!(history.all().iter().all(|r| r.area.is_finite()));
    }

    #[test]
    fn test_create_refuses_when_ids_exhausted() {
        let mut history = History::in_memory();
        let mut record = history.calculate(rect(1.0, 1.0), "").unwrap();
        record.id = u64::MAX;
        let document = transfer::export(&[record]).unwrap();

        let mut target = History::in_memory();
        target.import_document(&document).unwrap();

        assert!(target.calculate(rect(2.0, 2.0), "").is_err());
        assert_eq!(target.all().len(), 1);
    }

    #[test]
    fn test_delete_by_id() {
        let mut history = History::in_memory();
        let a = history.calculate(rect(1.0, 1.0), "").unwrap();
        let b = history.calculate(rect(2.0, 2.0), "").unwrap();

        assert!(history.delete_by_id(a.id).unwrap());
        assert_eq!(history.all(), vec![b.clone()]);

        assert!(!history.delete_by_id(a.id).unwrap());
        assert_eq!(history.all(), vec![b]);
    }

    #[test]
    fn test_update_description() {
        let mut history = History::in_memory();
        let a = history.calculate(rect(1.0, 1.0), "old").unwrap();
        let b = history.calculate(rect(2.0, 2.0), "other").unwrap();

        assert!(history.update_description(a.id, "new").unwrap());

        let stored = history.all();
        assert_eq!(stored[0].description, "new");
        assert_eq!(stored[0].area, a.area);
        assert_eq!(stored[0].timestamp, a.timestamp);
        assert_eq!(stored[1], b);
    }

    #[test]
    fn test_update_missing_id_does_not_write() {
        let mut history = History::in_memory();
        history.calculate(rect(1.0, 1.0), "keep").unwrap();
        let before = history.store().backend().get("calculations").unwrap();

        assert!(!history.update_description(42, "changed").unwrap());

        let after = history.store().backend().get("calculations").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_import_document_merges_and_persists() {
        let mut source = History::in_memory();
        source.calculate(rect(1.0, 2.0), "a").unwrap();
        source.calculate(ShapeParameters::Circle { radius: 1.0 }, "b").unwrap();
        let document = transfer::export(&source.all()).unwrap();

        let mut target = History::in_memory();
        target.calculate(rect(3.0, 3.0), "existing").unwrap();

        assert_eq!(target.import_document(&document).unwrap(), 2);
        let stored = target.all();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].description, "existing");
        assert_eq!(&stored[1..], &source.all()[..]);
    }

    #[test]
    fn test_import_document_rejects_and_keeps_history() {
        let mut history = History::in_memory();
        history.calculate(rect(1.0, 1.0), "").unwrap();
        let before = history.all();

        let err = history.import_document(br#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImportError>(),
            Some(ImportError::NotArray)
        ));
        assert_eq!(history.all(), before);
    }

    #[test]
    fn test_last_input() {
        let mut history = History::in_memory();
        assert!(history.last_input().is_none());

        history.remember_input(rect(2.0, 7.0)).unwrap();
        let last = history.last_input().unwrap();
        assert_eq!(last.shape_type, ShapeKind::Rectangle);
        assert_eq!(last.parameters, rect(2.0, 7.0));
    }
}
