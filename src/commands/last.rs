use anyhow::Result;

use shapecalc::shape;

pub fn execute(json: bool) -> Result<()> {
    let history = super::open_history()?;

    match history.last_input() {
        Some(input) if json => println!("{}", serde_json::to_string_pretty(&input)?),
        Some(input) => {
            println!("{}", input.shape_type);
            println!(
                "  {}",
                shape::describe_inputs(input.shape_type.as_str(), &input.parameters)
            );
        }
        None if json => println!("null"),
        None => println!("No input saved yet"),
    }

    Ok(())
}
