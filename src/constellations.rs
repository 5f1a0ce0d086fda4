//! IAU constellation boundary conversion
//!
//! Converts the boundary vertex list (`bound_in_20.txt`: RA in decimal hours,
//! Dec in degrees, constellation abbreviation) into a vertex CSV in degrees
//! and a border CSV joining each vertex to the next around its constellation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalogs::write_csv;
use crate::constants::CONSTELLATION_BORDER_COLOUR;
use crate::coordinates::{hours_to_degrees, round_to};
use crate::Result;

/// One boundary vertex in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryVertex {
    pub ra: f64,
    pub dec: f64,
    pub constellation: String,
}

/// One border edge between consecutive vertices of a constellation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderSegment {
    pub ra_start: f64,
    pub dec_start: f64,
    pub ra_end: f64,
    pub dec_end: f64,
    pub colour: String,
    pub width: f64,
    pub constellation: String,
}

/// Counts from a boundary conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsSummary {
    pub vertices: usize,
    pub constellations: usize,
    pub borders: usize,
}

/// Parse `ra_hours dec CON`; lines with fewer than three tokens are skipped
pub fn parse_bound_line(line: &str) -> Option<BoundaryVertex> {
    let mut parts = line.split_whitespace();
    let ra_hours = parts.next()?.parse::<f64>().ok()?;
    let dec = parts.next()?.parse::<f64>().ok()?;
    let constellation = parts.next()?.to_string();

    Some(BoundaryVertex {
        ra: round_to(hours_to_degrees(ra_hours), 6),
        dec,
        constellation,
    })
}

/// Parse every usable line of a boundary file
pub fn parse_bounds(text: &str) -> Vec<BoundaryVertex> {
    text.lines().filter_map(parse_bound_line).collect()
}

/// Split vertices into consecutive runs sharing a constellation
///
/// A constellation listed in two separate runs (e.g. the two halves of
/// Serpens) yields two groups.
pub fn group_by_constellation(vertices: &[BoundaryVertex]) -> Vec<&[BoundaryVertex]> {
    vertices
        .chunk_by(|a, b| a.constellation == b.constellation)
        .collect()
}

/// Join each vertex to the next one, closing every group into a loop
pub fn borders(groups: &[&[BoundaryVertex]]) -> Vec<BorderSegment> {
    let mut segments = Vec::new();
    for group in groups {
        for (i, v) in group.iter().enumerate() {
            let next = &group[(i + 1) % group.len()];
            segments.push(BorderSegment {
                ra_start: v.ra,
                dec_start: v.dec,
                ra_end: next.ra,
                dec_end: next.dec,
                colour: CONSTELLATION_BORDER_COLOUR.to_string(),
                width: 1.0,
                constellation: v.constellation.clone(),
            });
        }
    }
    segments
}

/// Convert a boundary file into the vertex and border CSVs
pub fn convert_bounds<P, Q, R>(input: P, vertices_out: Q, borders_out: R) -> Result<BoundsSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let text = fs::read_to_string(&input)?;
    let vertices = parse_bounds(&text);
    let groups = group_by_constellation(&vertices);
    let segments = borders(&groups);

    write_csv(&vertices, &vertices_out)?;
    write_csv(&segments, &borders_out)?;

    log::info!(
        "Converted {} vertices of {} boundary groups from {}",
        vertices.len(),
        groups.len(),
        input.as_ref().display()
    );

    Ok(BoundsSummary {
        vertices: vertices.len(),
        constellations: groups.len(),
        borders: segments.len(),
    })
}
