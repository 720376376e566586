pub mod config;
pub mod history;
pub mod logging;
pub mod paths;
pub mod query;
pub mod record;
pub mod shape;
pub mod store;
pub mod transfer;

// Re-export commonly used types
pub use config::Config;
pub use history::History;
pub use query::{Query, ShapeFilter, SortMode};
pub use record::{CalculationCollection, CalculationRecord, LastInput};
pub use shape::{ShapeKind, ShapeParameters, ValidationError};
