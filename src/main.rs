use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use housing_stats::analysis::summarize;
use housing_stats::export::{export_csv, export_json};
use housing_stats::parser::HouseReader;

#[derive(Parser, Debug)]
#[command(name = "housing-stats")]
#[command(about = "Housing Stats - classify buildings by height and find the most crowded one")]
#[command(version)]
struct Args {
    /// Path to the housing register CSV
    #[arg(default_value = "housing_data.csv")]
    file: PathBuf,

    /// Field delimiter of the input
    #[arg(long, short, default_value_t = ',')]
    delimiter: char,

    /// Export summary to CSV (output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export summary to JSON (output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    run(&args, &mut std::io::stdout().lock())
}

/// Loads the register, then writes the category counts and the least-area
/// address to `out`, one per line. Export confirmations go to stderr.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let delimiter = u8::try_from(args.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| eyre!("delimiter must be an ASCII character, got '{}'", args.delimiter))?;

    let houses = HouseReader::new()
        .with_delimiter(delimiter)
        .read_path(&args.file)?;
    let summary = summarize(&houses)?;

    writeln!(out, "{}", summary.category_counts)?;
    writeln!(out, "{}", summary.least_area_address().unwrap_or("None"))?;

    if let Some(csv_path) = &args.csv {
        export_csv(&summary, csv_path)?;
        eprintln!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&summary, json_path)?;
        eprintln!("Exported to JSON: {}", json_path.display());
    }

    Ok(())
}
