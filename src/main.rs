//! semgrep-report: Semgrep JSON to XLSX report converter.

use anyhow::{Context, Result};
use clap::Parser;
use semgrep_report::{convert_file, ConvertOutcome};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "semgrep-report")]
#[command(version)]
#[command(about = "Convert Semgrep SAST scan results into XLSX findings reports", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report written (or scan had no findings)
    1  Error occurred

EXAMPLES:
    # Write scan-results.xlsx into the current directory
    semgrep-report scan-results.json")]
struct Cli {
    /// Path to the Semgrep JSON scan output
    input: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let out_dir = std::env::current_dir().context("resolving current directory")?;
    let outcome = convert_file(&cli.input, &out_dir)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    match outcome {
        ConvertOutcome::NoFindings => {
            println!("[INFO] The SAST scan detected no vulnerabilities.");
        }
        ConvertOutcome::Written { path, findings } => {
            println!(
                "[INFO] SAST scan data extracted successfully: {} ({} findings)",
                path.display(),
                findings
            );
        }
    }

    Ok(())
}
