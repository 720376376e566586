//! Shape module - area formulas for the supported shapes
//!
//! A closed set of shape variants, each with a pure area formula, plus the
//! helpers the form layer needs: parameter validation and the human-readable
//! input summary stored alongside every calculation.
//!
//! # Example
//!
//! ```
//! use shapecalc::shape::{self, ShapeKind, ShapeParameters};
//!
//! let rect = ShapeParameters::Rectangle { width: 4.0, height: 5.0 };
//! assert_eq!(shape::area(&rect), 20.0);
//! assert_eq!(rect.kind(), ShapeKind::Rectangle);
//! assert_eq!(shape::describe_inputs("rectangle", &rect), "Width: 4, Height: 5");
//! ```

mod internal;

use std::collections::BTreeMap;

pub use internal::{format_number, ShapeKind, ShapeParameters, ValidationError};

/// Compute the area of a shape
pub fn area(shape: &ShapeParameters) -> f64 {
    shape.area()
}

/// Render the shape's fields as "Label: value, Label: value"
///
/// Returns an empty string when `shape_type` is not a known shape kind or
/// does not name the variant of `shape`.
pub fn describe_inputs(shape_type: &str, shape: &ShapeParameters) -> String {
    internal::describe_inputs(shape_type, shape)
}

/// Validate raw form fields for a shape kind and build its parameters
///
/// Every field the kind requires must be present, numeric, finite and
/// strictly positive, and the resulting area must be finite.
pub fn validate(
    kind: ShapeKind,
    fields: &BTreeMap<String, String>,
) -> Result<ShapeParameters, ValidationError> {
    internal::validate(kind, fields)
}
