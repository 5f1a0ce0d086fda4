//! Convert a blackbody colour table into `Color32` literals
//!
//! Usage:
//!   cargo run --bin temperature_colours -- [-i raw.txt] [-o processed.txt]

use clap::Parser;
use std::path::PathBuf;

use starprep::cli::CommonArgs;
use starprep::colours::convert_file;

#[derive(Parser, Debug)]
#[command(author, version, about = "Turns a temperature/RGB table into Color32 literal lines", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Colour table (default: raw.txt)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: processed.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = args.common.init()?;

    let input = args.input.unwrap_or_else(|| settings.colour_table_path());
    let output = args.output.unwrap_or_else(|| settings.colour_output_path());

    for line in convert_file(&input, &output)? {
        println!("{}", line);
    }
    Ok(())
}
