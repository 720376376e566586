use anyhow::Result;
use chrono::Local;

use shapecalc::query::{Query, ShapeFilter, SortMode};
use shapecalc::CalculationRecord;

pub fn execute(search: &str, shape_type: &str, sort: &str, json: bool) -> Result<()> {
    let filter: ShapeFilter = shape_type.parse()?;
    let sort: SortMode = sort.parse()?;

    let history = super::open_history()?;
    let view = Query::new()
        .search(search)
        .filter(filter)
        .sort(sort)
        .run(&history.all());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        output_human(&view);
    }

    Ok(())
}

fn output_human(view: &[CalculationRecord]) {
    if view.is_empty() {
        println!("No calculations found");
        return;
    }

    for record in view {
        println!(
            "#{}  {:<9}  Area: {:.2}  {}",
            record.id,
            record.shape_type,
            record.area,
            record
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
        if !record.inputs.is_empty() {
            println!("    {}", record.inputs);
        }
        if !record.description.is_empty() {
            println!("    {}", record.description);
        }
    }
}
