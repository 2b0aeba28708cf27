pub mod checker;
pub mod driver;
pub mod report;
pub mod rules;
pub mod structure;
pub mod utils;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Python file to check.
    /// The report is written next to this file.
    path: PathBuf,

    /// Output raw JSON.
    /// If true, the analysis is printed to stdout as JSON instead of
    /// writing the textual report file. Useful for machine parsing.
    #[arg(long)]
    json: bool,
}

/// Main entry point of the application.
///
/// Parses the arguments, runs the checker on the target file, and either
/// writes the report file or prints JSON.
fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json {
        // Analyze without touching the filesystem beyond the read, and
        // serialize the full report structure.
        let report = driver::analyze_file(&cli.path)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        // Default mode: write `style_report_<name>.txt` next to the input
        // and tell the user where it went.
        let report_path = driver::check_file(&cli.path)?;
        println!(
            "{}",
            format!("Report generated: {}", report_path.display()).green()
        );
    }

    Ok(())
}
