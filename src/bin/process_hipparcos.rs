//! Reduce the raw Hipparcos CSV to `hip_id,ra,dec,vmag,bv`

use clap::Parser;
use std::path::PathBuf;

use starprep::catalogs::process_catalogue;
use starprep::cli::CommonArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Selects and renames the Hipparcos columns", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Raw catalogue CSV (default: hipparcos_catalogue.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Filtered CSV to write (default: hipparcos_filtered.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = args.common.init()?;

    let input = args.input.unwrap_or_else(|| settings.raw_catalogue_path());
    let output = args.output.unwrap_or_else(|| settings.filtered_catalogue_path());

    let count = process_catalogue(&input, &output)?;
    println!("Filtered data ({} stars) saved to '{}'.", count, output.display());
    Ok(())
}
