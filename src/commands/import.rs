use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn execute(file: &Path) -> Result<()> {
    let document =
        fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let mut history = super::open_history()?;
    let imported = history
        .import_document(&document)
        .with_context(|| format!("Import of {} failed", file.display()))?;

    println!("✓ Imported {imported} calculations");
    println!("  Calculations in history: {}", history.all().len());

    Ok(())
}
