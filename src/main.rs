use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Shape area calculator with calculation history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the area of a shape and save it to the history
    Add {
        /// Shape type (rectangle, circle, triangle)
        shape: String,

        /// Rectangle width
        #[arg(long)]
        width: Option<String>,

        /// Rectangle or triangle height
        #[arg(long)]
        height: Option<String>,

        /// Circle radius
        #[arg(long)]
        radius: Option<String>,

        /// Triangle base
        #[arg(long)]
        base: Option<String>,

        /// Free-text note stored with the calculation
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Show the calculation history
    List {
        /// Case-insensitive search over shape type, area and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show one shape type (all, rectangle, circle, triangle)
        #[arg(short = 't', long = "type", default_value = "all")]
        shape_type: String,

        /// Sort order
        #[arg(long, default_value = "newest", value_parser = ["newest", "oldest", "area-asc", "area-desc"])]
        sort: String,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Change the description of a calculation
    Edit {
        /// Calculation id
        id: u64,

        /// New description (empty clears it)
        description: String,
    },

    /// Delete a calculation
    Delete {
        /// Calculation id
        id: u64,
    },

    /// Export the full history to shape-calculations-<date>.json
    Export {
        /// Directory to write the export file into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Merge calculations from an exported file into the history
    Import {
        /// File produced by `export`
        file: PathBuf,
    },

    /// Show the parameters of the last calculation entered
    Last {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    shapecalc::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            shape,
            width,
            height,
            radius,
            base,
            description,
        } => {
            let fields = commands::add::FormFields {
                width,
                height,
                radius,
                base,
            };
            commands::add::execute(&shape, fields, &description)?;
        }
        Commands::List {
            search,
            shape_type,
            sort,
            json,
        } => {
            commands::list::execute(&search, &shape_type, &sort, json)?;
        }
        Commands::Edit { id, description } => {
            commands::edit::execute(id, &description)?;
        }
        Commands::Delete { id } => {
            commands::delete::execute(id)?;
        }
        Commands::Export { output } => {
            commands::export::execute(&output)?;
        }
        Commands::Import { file } => {
            commands::import::execute(&file)?;
        }
        Commands::Last { json } => {
            commands::last::execute(json)?;
        }
    }

    Ok(())
}
