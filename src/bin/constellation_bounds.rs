//! Convert IAU boundary vertices into vertex and border CSVs
//!
//! Usage:
//!   cargo run --bin constellation_bounds -- [-i bound_in_20.txt]

use clap::Parser;
use std::path::PathBuf;

use starprep::cli::CommonArgs;
use starprep::constants::{
    BOUNDARY_INPUT_FILE, CONSTELLATION_BORDERS_FILE, CONSTELLATION_VERTICES_FILE,
};
use starprep::constellations::convert_bounds;

#[derive(Parser, Debug)]
#[command(author, version, about = "Converts constellation boundary vertices to CSV", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Boundary vertex list (RA hours, Dec degrees, constellation)
    #[arg(short, long, default_value = BOUNDARY_INPUT_FILE)]
    input: PathBuf,

    /// Vertex CSV to write
    #[arg(long, default_value = CONSTELLATION_VERTICES_FILE)]
    vertices: PathBuf,

    /// Border CSV to write
    #[arg(long, default_value = CONSTELLATION_BORDERS_FILE)]
    borders: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = args.common.init()?;

    let input = settings.work_dir.join(&args.input);
    let vertices = settings.work_dir.join(&args.vertices);
    let borders = settings.work_dir.join(&args.borders);

    let summary = convert_bounds(&input, &vertices, &borders)?;
    println!(
        "File processed and saved as {} ({} vertices)",
        vertices.display(),
        summary.vertices
    );
    println!(
        "File processed and saved as {} ({} borders in {} groups)",
        borders.display(),
        summary.borders,
        summary.constellations
    );
    Ok(())
}
