//! Command-line argument definitions for the Gantry CLI.

use clap::Parser;

/// Command-line arguments for the Gantry diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML topology description
    #[arg(help = "Path to the topology description file")]
    pub input: String,

    /// Output file stem; overrides the description's `filename`
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (png, svg, pdf, dot); overrides the description
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
