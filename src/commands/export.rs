use anyhow::Result;
use std::path::Path;

use shapecalc::transfer;

pub fn execute(output: &Path) -> Result<()> {
    let history = super::open_history()?;
    let records = history.all();

    let path = transfer::export_to_dir(&records, output)?;
    println!("✓ Exported {} calculations to {}", records.len(), path.display());

    Ok(())
}
