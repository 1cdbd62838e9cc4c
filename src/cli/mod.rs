use crate::charts;
use crate::errors::AppResult;
use crate::loader;
use crate::summary;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// System Inventory Report Visualiser
#[derive(Parser)]
#[command(name = "inventory-visuals")]
#[command(about = "Render charts and a Markdown summary from a JSON inventory report")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON inventory report
    pub report_path: PathBuf,
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            return Ok(());
        }
        Err(_) => {
            // Wrong argument count: usage goes to stdout, exit code 1
            println!("Usage: inventory-visuals <path-to-report.json>");
            std::process::exit(1);
        }
    };

    generate_visuals(&cli.report_path)
}

/// Run the full pipeline: load the report, render the three charts, write
/// the summary. Artifacts land in the directory the report lives in.
pub fn generate_visuals(report_path: &Path) -> AppResult<()> {
    let report = loader::load_report(report_path)?;

    let output_dir = output_dir_of(report_path);
    charts::ensure_output_dir(&output_dir)?;
    info!("Rendering charts into {}", output_dir.display());

    charts::render_file_size_distribution(&report, &output_dir)?;
    charts::render_file_type_distribution(&report, &output_dir)?;
    charts::render_files_per_user(&report, &output_dir)?;
    summary::write_summary(&report, &output_dir)?;

    println!("Visualizations saved to {}", output_dir.display());
    Ok(())
}

/// Directory component of the report path. A bare filename has an empty
/// parent, which means the current directory.
fn output_dir_of(report_path: &Path) -> PathBuf {
    match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
