//! Internal implementation for shape module

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Types
// =============================================================================

/// Discriminator for the supported shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Form field names this kind requires, in display order
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Rectangle => &["width", "height"],
            ShapeKind::Circle => &["radius"],
            ShapeKind::Triangle => &["base", "height"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "triangle" => Ok(ShapeKind::Triangle),
            _ => Err(ValidationError::UnknownShape(s.to_string())),
        }
    }
}

/// Validated parameters of one shape
///
/// Serialized as the bare field map (`{"width":4,"height":5}`); the variant
/// is recovered from which fields are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeParameters {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
}

impl ShapeParameters {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParameters::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeParameters::Circle { .. } => ShapeKind::Circle,
            ShapeParameters::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            ShapeParameters::Rectangle { width, height } => width * height,
            ShapeParameters::Circle { radius } => PI * radius.powi(2),
            ShapeParameters::Triangle { base, height } => 0.5 * base * height,
        }
    }

    /// Long description shown after a calculation
    pub fn details(&self) -> String {
        match self {
            ShapeParameters::Rectangle { width, height } => {
                format!(
                    "Rectangle with width: {} and height: {}",
                    format_number(*width),
                    format_number(*height)
                )
            }
            ShapeParameters::Circle { radius } => {
                format!("Circle with radius: {}", format_number(*radius))
            }
            ShapeParameters::Triangle { base, height } => format!(
                "Triangle with base: {} and height: {}",
                format_number(*base),
                format_number(*height)
            ),
        }
    }

    /// (label, value) pairs in display order
    fn labelled_fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            ShapeParameters::Rectangle { width, height } => {
                vec![("Width", width), ("Height", height)]
            }
            ShapeParameters::Circle { radius } => vec![("Radius", radius)],
            ShapeParameters::Triangle { base, height } => vec![("Base", base), ("Height", height)],
        }
    }
}

/// Form input rejected before a shape could be built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Unknown shape type: {0}")]
    UnknownShape(String),
    #[error("Please enter a valid positive number for {field}")]
    Missing { field: String },
    #[error("Please enter a valid positive number for {field} (got \"{value}\")")]
    NotNumeric { field: String, value: String },
    #[error("Please enter a valid positive number for {field} (got {value})")]
    NotPositive { field: String, value: f64 },
    #[error("The area of this {shape} is too large to store")]
    AreaOverflow { shape: ShapeKind },
}

// =============================================================================
// Operations
// =============================================================================

pub fn describe_inputs(shape_type: &str, shape: &ShapeParameters) -> String {
    let matches_variant = match shape_type {
        "rectangle" => shape.kind() == ShapeKind::Rectangle,
        "circle" => shape.kind() == ShapeKind::Circle,
        "triangle" => shape.kind() == ShapeKind::Triangle,
        _ => false,
    };
    if !matches_variant {
        return String::new();
    }

    shape
        .labelled_fields()
        .iter()
        .map(|(label, value)| format!("{label}: {}", format_number(*value)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn validate(
    kind: ShapeKind,
    fields: &BTreeMap<String, String>,
) -> Result<ShapeParameters, ValidationError> {
    let values = kind
        .fields()
        .iter()
        .map(|field| parse_positive(field, fields.get(*field)))
        .collect::<Result<Vec<f64>, _>>()?;

    let shape = match kind {
        ShapeKind::Rectangle => ShapeParameters::Rectangle {
            width: values[0],
            height: values[1],
        },
        ShapeKind::Circle => ShapeParameters::Circle { radius: values[0] },
        ShapeKind::Triangle => ShapeParameters::Triangle {
            base: values[0],
            height: values[1],
        },
    };

    if !shape.area().is_finite() {
        return Err(ValidationError::AreaOverflow { shape: kind });
    }
    Ok(shape)
}

/// Decimal rendering with an exponent outside `1e-6..1e21`, the way a
/// browser prints numbers (`1e+200`, `1e-7`)
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn parse_positive(field: &str, raw: Option<&String>) -> Result<f64, ValidationError> {
    let raw = raw.map(|s| s.trim()).unwrap_or_default();
    if raw.is_empty() {
        return Err(ValidationError::Missing {
            field: field.to_string(),
        });
    }

    let value: f64 = raw
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::NotNumeric {
            field: field.to_string(),
            value: raw.to_string(),
        })?;

    if value <= 0.0 {
        return Err(ValidationError::NotPositive {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn form(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_area_formulas() {
        let rect = ShapeParameters::Rectangle {
            width: 4.0,
            height: 5.0,
        };
        let circle = ShapeParameters::Circle { radius: 5.0 };
        let tri = ShapeParameters::Triangle {
            base: 6.0,
            height: 3.0,
        };

        assert_relative_eq!(rect.area(), 20.0);
        assert_relative_eq!(circle.area(), 78.539_816_339_744_83, epsilon = 1e-12);
        assert_relative_eq!(tri.area(), 9.0);
    }

    #[test]
    fn test_describe_inputs() {
        let rect = ShapeParameters::Rectangle {
            width: 4.0,
            height: 5.5,
        };
        assert_eq!(describe_inputs("rectangle", &rect), "Width: 4, Height: 5.5");

        let tri = ShapeParameters::Triangle {
            base: 2.0,
            height: 3.0,
        };
        assert_eq!(describe_inputs("triangle", &tri), "Base: 2, Height: 3");

        let circle = ShapeParameters::Circle { radius: 1.25 };
        assert_eq!(describe_inputs("circle", &circle), "Radius: 1.25");
    }

    #[test]
    fn test_describe_inputs_unknown_or_mismatched_type() {
        let circle = ShapeParameters::Circle { radius: 1.0 };
        assert_eq!(describe_inputs("hexagon", &circle), "");
        assert_eq!(describe_inputs("rectangle", &circle), "");
    }

    #[test]
    fn test_shape_kind_parse() {
        assert_eq!("Circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!(
            " triangle ".parse::<ShapeKind>().unwrap(),
            ShapeKind::Triangle
        );
        assert!(matches!(
            "square".parse::<ShapeKind>(),
            Err(ValidationError::UnknownShape(_))
        ));
    }

    #[test]
    fn test_validate_builds_parameters() {
        let shape = validate(
            ShapeKind::Triangle,
            &form(&[("base", "6"), ("height", " 2.5 ")]),
        )
        .unwrap();
        assert_eq!(
            shape,
            ShapeParameters::Triangle {
                base: 6.0,
                height: 2.5
            }
        );
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let missing = validate(ShapeKind::Rectangle, &form(&[("width", "3")]));
        assert_eq!(
            missing,
            Err(ValidationError::Missing {
                field: "height".to_string()
            })
        );

        let text = validate(ShapeKind::Circle, &form(&[("radius", "abc")]));
        assert!(matches!(text, Err(ValidationError::NotNumeric { .. })));

        let nan = validate(ShapeKind::Circle, &form(&[("radius", "NaN")]));
        assert!(matches!(nan, Err(ValidationError::NotNumeric { .. })));

        let zero = validate(ShapeKind::Circle, &form(&[("radius", "0")]));
        assert!(matches!(zero, Err(ValidationError::NotPositive { .. })));

        let negative = validate(
            ShapeKind::Rectangle,
            &form(&[("width", "-1"), ("height", "2")]),
        );
        assert!(matches!(negative, Err(ValidationError::NotPositive { .. })));
    }

    #[test]
    fn test_parameters_serialize_as_field_map() {
        let rect = ShapeParameters::Rectangle {
            width: 4.0,
            height: 5.0,
        };
        let json = serde_json::to_value(rect).unwrap();
        assert_eq!(json, serde_json::json!({"width": 4.0, "height": 5.0}));

        let tri: ShapeParameters = serde_json::from_str(r#"{"base":2,"height":3}"#).unwrap();
        assert_eq!(tri.kind(), ShapeKind::Triangle);
    }

    #[test]
    fn test_validate_rejects_overflowing_area() {
        let huge = validate(
            ShapeKind::Rectangle,
            &form(&[("width", "1e200"), ("height", "1e200")]),
        );
        assert_eq!(
            huge,
            Err(ValidationError::AreaOverflow {
                shape: ShapeKind::Rectangle
            })
        );

        let circle = validate(ShapeKind::Circle, &form(&[("radius", "1e155")]));
        assert!(matches!(circle, Err(ValidationError::AreaOverflow { .. })));
    }

    #[test]
    fn test_validation_messages() {
        let missing = validate(ShapeKind::Circle, &form(&[]));
        assert_eq!(
            missing.unwrap_err().to_string(),
            "Please enter a valid positive number for radius"
        );

        let negative = validate(ShapeKind::Circle, &form(&[("radius", "-1")]));
        assert!(negative
            .unwrap_err()
            .to_string()
            .starts_with("Please enter a valid positive number for radius"));
    }

    #[test]
    fn test_format_number_uses_exponent_at_extremes() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e200), "1e+200");
        assert_eq!(format_number(1.5e21), "1.5e+21");

        let tiny = ShapeParameters::Circle { radius: 1e-7 };
        assert_eq!(describe_inputs("circle", &tiny), "Radius: 1e-7");
    }

    #[test]
    fn test_details() {
        let circle = ShapeParameters::Circle { radius: 3.0 };
        assert_eq!(circle.details(), "Circle with radius: 3");
    }
}
