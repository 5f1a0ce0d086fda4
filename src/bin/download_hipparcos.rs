//! Download the Hipparcos catalogue
//!
//! Fetches `hip_main.dat` from the CDS archive (reusing an existing copy) and
//! converts it to `hipparcos_catalogue.csv` with the VizieR column names.
//!
//! Usage:
//!   cargo run --bin download_hipparcos -- [--force] [-C data/]

use clap::{ArgAction, Parser};
use starprep::cli::CommonArgs;
use starprep::data::{availability_message, download_catalogue};

/// Hipparcos catalogue downloader
#[derive(Parser, Debug)]
#[command(author, version, about = "Downloads the Hipparcos catalogue and converts it to CSV", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Download again even if the catalogue file exists
    #[arg(short, long, action = ArgAction::SetTrue)]
    force: bool,

    /// Catalogue URL
    #[arg(long)]
    url: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut settings = args.common.init()?.with_force_download(args.force);
    if let Some(url) = args.url {
        settings.catalogue_url = url;
    }

    let summary = download_catalogue(&settings)?;

    println!("{}", availability_message(1));
    println!(
        "Downloaded {} stars from the Hipparcos catalogue into {}",
        summary.star_count,
        summary.output.display()
    );
    Ok(())
}
