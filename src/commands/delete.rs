use anyhow::Result;

pub fn execute(id: u64) -> Result<()> {
    let mut history = super::open_history()?;

    if history.delete_by_id(id)? {
        println!("✓ Deleted #{id}");
    } else {
        println!("No calculation with id {id}");
    }

    Ok(())
}
