//! Reference lines for the sky renderer
//!
//! The ecliptic, the galactic equator and the equatorial coordinate grid are
//! approximated by straight segments every `step` degrees, in the renderer's
//! line format.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalogs::write_csv;
use crate::constants::{
    ECLIPTIC_COLOUR, ECLIPTIC_INCLINATION_DEG, GALACTIC_EQUATOR_COLOUR, GALACTIC_POLE_DEC_DEG,
    GALACTIC_POLE_RA_DEG, GRID_COLOUR, REFERENCE_COLOUR, REFERENCE_WIDTH,
};
use crate::Result;

/// A line segment between two sky positions (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyLine {
    pub ra_start: f64,
    pub dec_start: f64,
    pub ra_end: f64,
    pub dec_end: f64,
    /// RRGGBBAA hex colour
    pub colour: String,
    pub width: f64,
}

/// Declination of the ecliptic at a given right ascension
pub fn ecliptic_dec(ra_deg: f64) -> f64 {
    (ra_deg.to_radians().sin() * ECLIPTIC_INCLINATION_DEG.to_radians().tan())
        .atan()
        .to_degrees()
}

/// Declination of the galactic equator at a given right ascension
pub fn galactic_equator_dec(ra_deg: f64) -> f64 {
    let ra = ra_deg.to_radians() - GALACTIC_POLE_RA_DEG.to_radians();
    -(ra.cos() / GALACTIC_POLE_DEC_DEG.to_radians().tan())
        .atan()
        .to_degrees()
}

/// Sample `dec_at` around the full circle of right ascension
fn trace<F>(step_deg: u32, colour: &str, width: f64, dec_at: F) -> Vec<SkyLine>
where
    F: Fn(f64) -> f64,
{
    let step = step_deg.max(1);
    (0..360)
        .step_by(step as usize)
        .map(|ra| {
            let ra_next = ra + step;
            SkyLine {
                ra_start: ra as f64,
                dec_start: dec_at(ra as f64),
                ra_end: (ra_next % 360) as f64,
                dec_end: dec_at(ra_next as f64),
                colour: colour.to_string(),
                width,
            }
        })
        .collect()
}

/// Segments running north along the meridian at `ra`, from pole to pole
fn meridian(ra: u32, step_deg: u32, colour: &str, width: f64) -> Vec<SkyLine> {
    let step = step_deg.max(1) as i32;
    (-90..90)
        .step_by(step as usize)
        .map(|dec| SkyLine {
            ra_start: ra as f64,
            dec_start: dec as f64,
            ra_end: ra as f64,
            dec_end: (dec + step).min(90) as f64,
            colour: colour.to_string(),
            width,
        })
        .collect()
}

/// Segments along the ecliptic
pub fn ecliptic(step_deg: u32) -> Vec<SkyLine> {
    trace(step_deg, ECLIPTIC_COLOUR, 1.0, ecliptic_dec)
}

/// Segments along the galactic equator
pub fn galactic_equator(step_deg: u32) -> Vec<SkyLine> {
    trace(step_deg, GALACTIC_EQUATOR_COLOUR, 1.0, galactic_equator_dec)
}

/// The celestial equator, drawn in the reference colour
pub fn celestial_equator(step_deg: u32) -> Vec<SkyLine> {
    trace(step_deg, REFERENCE_COLOUR, REFERENCE_WIDTH, |_| 0.0)
}

/// Grid circles of constant declination, every `step` degrees
///
/// The equator is left out; [`celestial_equator`] draws it.
pub fn celestial_meridians(step_deg: u32) -> Vec<SkyLine> {
    let step = step_deg.max(1);
    (-90..90)
        .step_by(step as usize)
        .filter(|&dec| dec != 0)
        .flat_map(|dec| trace(step, GRID_COLOUR, 1.0, move |_| dec as f64))
        .collect()
}

/// The meridians at RA 0 and 180, drawn in the reference colour
pub fn prime_meridian(step_deg: u32) -> Vec<SkyLine> {
    [0, 180]
        .into_iter()
        .flat_map(|ra| meridian(ra, step_deg, REFERENCE_COLOUR, REFERENCE_WIDTH))
        .collect()
}

/// Grid meridians every `step` degrees of RA, except those of [`prime_meridian`]
pub fn lines_of_latitude(step_deg: u32) -> Vec<SkyLine> {
    let step = step_deg.max(1);
    (0..360)
        .step_by(step as usize)
        .filter(|&ra| ra != 0 && ra != 180)
        .flat_map(|ra| meridian(ra, step, GRID_COLOUR, 1.0))
        .collect()
}

/// Write segments as `ra_start,dec_start,ra_end,dec_end,colour,width`
pub fn write_lines<P: AsRef<Path>>(lines: &[SkyLine], path: P) -> Result<()> {
    write_csv(lines, &path)?;
    log::info!("Wrote {} line segments to {}", lines.len(), path.as_ref().display());
    Ok(())
}
