//! Generate the reference line files: ecliptic, galactic equator and the
//! equatorial coordinate grid
//!
//! Usage:
//!   cargo run --bin sky_lines -- [--circle ecliptic] [--step 5]

use clap::{Parser, ValueEnum};

use starprep::cli::CommonArgs;
use starprep::sky_lines::{
    celestial_equator, celestial_meridians, ecliptic, galactic_equator, lines_of_latitude,
    prime_meridian, write_lines, SkyLine,
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Circle {
    Ecliptic,
    GalacticEquator,
    CelestialMeridians,
    PrimeMeridian,
    LinesOfLatitude,
    CelestialEquator,
}

impl Circle {
    const ALL: [Circle; 6] = [
        Circle::Ecliptic,
        Circle::GalacticEquator,
        Circle::CelestialMeridians,
        Circle::PrimeMeridian,
        Circle::LinesOfLatitude,
        Circle::CelestialEquator,
    ];

    fn file_name(self) -> &'static str {
        match self {
            Circle::Ecliptic => "ecliptic.csv",
            Circle::GalacticEquator => "galactic_equator.csv",
            Circle::CelestialMeridians => "celestial-meridians.csv",
            Circle::PrimeMeridian => "prime-meridian.csv",
            Circle::LinesOfLatitude => "celestial-lines-of-latitude.csv",
            Circle::CelestialEquator => "celestial-equator.csv",
        }
    }

    fn lines(self, step: u32) -> Vec<SkyLine> {
        match self {
            Circle::Ecliptic => ecliptic(step),
            Circle::GalacticEquator => galactic_equator(step),
            Circle::CelestialMeridians => celestial_meridians(step),
            Circle::PrimeMeridian => prime_meridian(step),
            Circle::LinesOfLatitude => lines_of_latitude(step),
            Circle::CelestialEquator => celestial_equator(step),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Writes sky reference lines as CSV", long_about = None)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Which line set to generate (all when omitted)
    #[arg(long, value_enum)]
    circle: Option<Circle>,

    /// Sampling step in degrees
    #[arg(long)]
    step: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut settings = args.common.init()?;
    if let Some(step) = args.step {
        settings = settings.with_sky_line_step(step);
    }
    let step = settings.sky_line_step_deg;

    let circles = match args.circle {
        Some(circle) => vec![circle],
        None => Circle::ALL.to_vec(),
    };

    for circle in circles {
        let path = settings.path(circle.file_name());
        let lines = circle.lines(step);
        write_lines(&lines, &path)?;
        println!("Wrote {} segments to {}", lines.len(), path.display());
    }
    Ok(())
}
