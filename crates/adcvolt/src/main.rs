use std::path::PathBuf;
use std::process::ExitCode;

use adcvolt_core::{pipeline, PipelineError};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert raw ADC samples into a voltage safety report", long_about = None)]
struct Cli {
    /// CSV file with `sensor_id` and `raw_value` columns
    input: PathBuf,
    /// Destination CSV for the report (overwritten if present)
    output: PathBuf,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();

    match pipeline::run(&cli.input, &cli.output) {
        Ok(summary) => {
            println!(
                "Processing complete. Data written to {}",
                summary.output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(PipelineError::NotFound { path }) => {
            warn!(path = %path.display(), "input file not found");
            eprintln!("Input file not found.");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).with_context(|| {
            format!(
                "failed to build voltage report from {}",
                cli.input.display()
            )
        }),
    }
}
