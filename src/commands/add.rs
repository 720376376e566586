use anyhow::Result;
use std::collections::BTreeMap;

use shapecalc::shape::{self, ShapeKind};

/// Raw form values as typed by the user
pub struct FormFields {
    pub width: Option<String>,
    pub height: Option<String>,
    pub radius: Option<String>,
    pub base: Option<String>,
}

impl FormFields {
    fn into_map(self) -> BTreeMap<String, String> {
        [
            ("width", self.width),
            ("height", self.height),
            ("radius", self.radius),
            ("base", self.base),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
    }
}

pub fn execute(shape_type: &str, fields: FormFields, description: &str) -> Result<()> {
    let kind: ShapeKind = shape_type.parse()?;
    let params = shape::validate(kind, &fields.into_map())?;

    let mut history = super::open_history()?;
    let record = history.calculate(params, description)?;
    history.remember_input(params)?;

    println!("{}", params.details());
    println!("Area: {:.2}", record.area);
    println!("  Saved as #{}", record.id);

    Ok(())
}
