use anyhow::Result;

pub fn execute(id: u64, description: &str) -> Result<()> {
    let mut history = super::open_history()?;

    if history.update_description(id, description)? {
        println!("✓ Updated description of #{id}");
    } else {
        println!("No calculation with id {id}");
    }

    Ok(())
}
