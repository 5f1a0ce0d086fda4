//! Add proper names and Bayer/Flamsteed designations from SIMBAD
//!
//! Reads `hipparcos_filtered.csv`, queries SIMBAD in batches of HIP numbers
//! with a pause between batches, and writes `hipparcos_data_with_names.csv`.
//! Batches that fail are logged and skipped.
//!
//! Usage:
//!   cargo run --bin add_designations -- [--chunk-size 1000] [--delay-ms 2000]

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use starprep::cli::CommonArgs;
use starprep::designations::add_designations;
use starprep::SimbadClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Enriches the filtered catalogue with star names from SIMBAD", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Filtered catalogue CSV (default: hipparcos_filtered.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV (default: hipparcos_data_with_names.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HIP numbers per SIMBAD query
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Pause between queries in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut settings = args.common.init()?;
    if let Some(chunk_size) = args.chunk_size {
        settings = settings.with_chunk_size(chunk_size);
    }
    if let Some(delay) = args.delay_ms {
        settings = settings.with_batch_delay(Duration::from_millis(delay));
    }

    let input = args.input.unwrap_or_else(|| settings.filtered_catalogue_path());
    let output = args.output.unwrap_or_else(|| settings.named_catalogue_path());

    let client = SimbadClient::from_settings(&settings)?;
    let stats = add_designations(&input, &output, &client, &settings)?;

    println!("Statistics:\n{}", stats);
    println!("Star names and designations saved to '{}'.", output.display());
    Ok(())
}
