//! Query module - filtered and sorted views over the calculation history
//!
//! A view is always a fresh `Vec`; the collection it was built from and the
//! persisted store are never touched.
//!
//! # Example
//!
//! ```
//! use shapecalc::query::{self, ShapeFilter, SortMode};
//!
//! let records = Vec::new();
//! let view = query::query(&records, "circ", ShapeFilter::All, SortMode::Newest);
//! assert!(view.is_empty());
//! ```

mod engine;

pub use engine::{query, Query, ShapeFilter, SortMode};
