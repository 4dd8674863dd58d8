//! CLI logic for the Gantry diagram tool.

pub mod error_adapter;

mod args;
mod config;
mod description;

pub use args::Args;

use std::{path::PathBuf, str::FromStr};

use log::info;

use gantry::{Error, OutputFormat};

/// Run the Gantry CLI application
///
/// Loads the topology description, builds the diagram through the library,
/// and renders it to the configured output file. Returns the path of the
/// written file.
///
/// # Errors
///
/// Returns `Error` for:
/// - File I/O errors
/// - Configuration or description parsing errors
/// - Unknown edge endpoints
/// - Rendering errors
pub fn run(args: &Args) -> Result<PathBuf, Error> {
    info!(input_path = args.input; "Processing topology description");

    // Load configuration and the topology description
    let app_config = config::load_config(args.config.as_ref())?;
    let topology = description::load(&args.input)?;

    let format = args
        .format
        .as_deref()
        .map(OutputFormat::from_str)
        .transpose()
        .map_err(config::ConfigError::Parse)?;

    // Build and render through the Diagram API
    let diagram_config = topology.diagram_config(&app_config, args.output.as_deref(), format);
    let path = topology.render(diagram_config)?;

    info!(output_file = path.display().to_string(); "Diagram exported successfully");

    Ok(path)
}
