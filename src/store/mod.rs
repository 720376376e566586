//! Storage layer for shapecalc - string-keyed documents
//!
//! Mirrors a browser's key/value storage: every key holds one JSON document
//! that is read and replaced wholesale. The backend is chosen with enum
//! dispatch, so the calculation store has no generic parameter.
//!
//! # Example
//!
//! ```no_run
//! use shapecalc::store::{CalculationStore, StorageBackend};
//!
//! let backend = StorageBackend::open_file("/tmp/shapecalc-data")?;
//! let store = CalculationStore::new(backend, "calculations", "shapeInputs");
//! let records = store.load();
//! println!("{} calculations", records.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod backend;
pub mod calculations;

pub use backend::{FileStore, MemoryStore, StorageBackend};
pub use calculations::CalculationStore;
