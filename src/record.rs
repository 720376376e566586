//! Domain types for the calculation history
//!
//! These types are storage-agnostic - they don't know about files or keys.
//! Field names on the wire match the persisted/exported document layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shape::{self, ShapeKind, ShapeParameters};

/// One persisted calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub id: u64,
    pub shape_type: ShapeKind,
    /// Snapshot of the parameters at creation time
    pub shape: ShapeParameters,
    /// Computed once at creation, never recomputed
    pub area: f64,
    #[serde(default)]
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// "Width: 4, Height: 5" summary derived from `shape`
    #[serde(default)]
    pub inputs: String,
}

impl CalculationRecord {
    /// Build a record, deriving the inputs summary from the shape
    pub fn new(
        id: u64,
        shape_type: ShapeKind,
        shape: ShapeParameters,
        area: f64,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            shape_type,
            inputs: shape::describe_inputs(shape_type.as_str(), &shape),
            shape,
            area,
            description: description.into(),
            timestamp,
        }
    }
}

/// Full ordered set of records, the unit of persistence
pub type CalculationCollection = Vec<CalculationRecord>;

/// Most recently submitted form input, kept so a form can be pre-filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastInput {
    pub shape_type: ShapeKind,
    pub parameters: ShapeParameters,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_wire_layout() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let record = CalculationRecord::new(
            7,
            ShapeKind::Circle,
            ShapeParameters::Circle { radius: 2.0 },
            12.5,
            "pond",
            ts,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["shapeType"], "circle");
        assert_eq!(json["shape"]["radius"], 2.0);
        assert_eq!(json["description"], "pond");
        assert_eq!(json["inputs"], "Radius: 2");
        assert_eq!(json["timestamp"], "2024-01-01T10:00:00Z");
    }

    #[test]
    fn test_record_missing_optional_fields() {
        // Documents written before descriptions existed
        let json = r#"{
            "id": 1700000000000,
            "shapeType": "rectangle",
            "shape": {"width": 4, "height": 5},
            "area": 20,
            "timestamp": "2023-11-14T22:13:20.000Z"
        }"#;

        let record: CalculationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.inputs, "");
        assert_eq!(record.shape_type, ShapeKind::Rectangle);
    }
}
