//! Proper names and Bayer/Flamsteed designations
//!
//! Stars are looked up on a name-resolution service in fixed-size batches of
//! `HIP n` identifiers with a constant pause between batches. A batch that
//! fails is logged and contributes no rows; the run carries on.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::thread;

use lazy_static::lazy_static;
use regex::Regex;

use crate::catalogs::hipparcos::read_filtered_csv;
use crate::catalogs::{write_csv, HipId, NamedStarRecord, StarRecord};
use crate::constants::is_constellation;
use crate::{Result, Settings};

mod simbad;

pub use simbad::{build_query, parse_tap_csv, SimbadClient};

/// One answer from the lookup service: the identifier we asked for and all
/// identifiers of the matching object, `|`-separated
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierRow {
    pub identifier: String,
    pub ids: String,
}

/// A service that resolves star identifiers to their alternative names
pub trait DesignationSource {
    /// Look up one batch of identifiers such as `HIP 32349`
    ///
    /// Identifiers the service does not know are simply absent from the result.
    fn lookup(&self, identifiers: &[String]) -> Result<Vec<IdentifierRow>>;
}

/// Names found for one star
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Designations {
    pub hip: HipId,
    pub name: String,
    pub bayer: String,
    pub flamsteed: String,
}

/// Counts of stars carrying each kind of name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesignationStats {
    pub named: usize,
    pub bayer: usize,
    pub flamsteed: usize,
}

impl DesignationStats {
    pub fn from_designations(designations: &[Designations]) -> Self {
        let mut stats = Self::default();
        for d in designations {
            if !d.name.trim().is_empty() {
                stats.named += 1;
            }
            if !d.bayer.is_empty() {
                stats.bayer += 1;
            }
            if !d.flamsteed.is_empty() {
                stats.flamsteed += 1;
            }
        }
        stats
    }
}

impl fmt::Display for DesignationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Named stars: {}", self.named)?;
        writeln!(f, "Bayer designated stars: {}", self.bayer)?;
        write!(f, "Flamsteed designated stars: {}", self.flamsteed)
    }
}

lazy_static! {
    /// `HIP 32349` style identifiers
    static ref HIP_PATTERN: Regex = Regex::new(r"^HIP\s+(\d+)$").expect("valid HIP pattern");
}

/// Format a HIP number as a lookup identifier
pub fn hip_identifier(hip: HipId) -> String {
    format!("HIP {}", hip)
}

/// Recover the HIP number from an identifier such as `HIP 32349`
pub fn hip_from_identifier(identifier: &str) -> Option<HipId> {
    HIP_PATTERN
        .captures(identifier.trim())
        .and_then(|caps| caps[1].parse().ok())
}

/// Last three characters of `s`, if it has at least three
fn last_three(s: &str) -> Option<&str> {
    let (idx, _) = s.char_indices().rev().nth(2)?;
    Some(&s[idx..])
}

/// Turn a `* alf CMa` style entry into `alf CMa`, or `None` if it is not a
/// Bayer/Flamsteed designation
fn catalogue_designation(entry: &str) -> Option<String> {
    if !entry.starts_with('*') {
        return None;
    }
    if !is_constellation(last_three(entry)?) {
        return None;
    }

    let cleaned: String = entry[1..]
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Extract the proper name and designations from a `|`-separated id list
///
/// `NAME x` gives the proper name. `* ...` entries ending in a constellation
/// abbreviation are Flamsteed designations when they start with a digit and
/// Bayer designations otherwise. A later entry of the same kind replaces an
/// earlier one.
pub fn parse_identifiers(hip: HipId, ids: &str) -> Designations {
    let mut data = Designations {
        hip,
        ..Default::default()
    };

    for entry in ids.split('|') {
        let entry = entry.trim();
        if let Some(name) = entry.strip_prefix("NAME ") {
            data.name = name.to_string();
        }
        if let Some(designation) = catalogue_designation(entry) {
            log::debug!("hip: {}, name raw: {}, name processed: {}", hip, entry, designation);
            if designation.starts_with(|c: char| c.is_numeric()) {
                data.flamsteed = designation;
            } else {
                data.bayer = designation;
            }
        }
    }

    data
}

/// Sort the HIP numbers and split them into batches of lookup identifiers
pub fn batch_identifiers(hip_ids: &[HipId], chunk_size: usize) -> Vec<Vec<String>> {
    let mut sorted = hip_ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.iter().map(|&hip| hip_identifier(hip)).collect())
        .collect()
}

/// Look up one batch; on failure log the error and return nothing
pub fn query_batch<S: DesignationSource + ?Sized>(source: &S, batch: &[String]) -> Vec<Designations> {
    let rows = match source.lookup(batch) {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Error in batch query: {}", e);
            return Vec::new();
        }
    };

    if rows.is_empty() {
        log::warn!("No result returned for the batch.");
    }

    rows.iter()
        .filter_map(|row| match hip_from_identifier(&row.identifier) {
            Some(hip) => Some(parse_identifiers(hip, &row.ids)),
            None => {
                log::warn!("Ignoring unexpected identifier in response: {}", row.identifier);
                None
            }
        })
        .collect()
}

/// Look up every star, batch by batch, pausing between batches
pub fn enrich<S: DesignationSource + ?Sized>(
    source: &S,
    hip_ids: &[HipId],
    settings: &Settings,
) -> Vec<Designations> {
    let batches = batch_identifiers(hip_ids, settings.chunk_size);
    let total = batches.len();
    let delay = settings.batch_delay();
    let mut all = Vec::new();

    for (i, batch) in batches.iter().enumerate() {
        if let (Some(first), Some(last)) = (batch.first(), batch.last()) {
            log::info!("{} .. {}", first, last);
        }

        all.extend(query_batch(source, batch));

        if i + 1 < total && !delay.is_zero() {
            thread::sleep(delay);
        }
        log::info!("Processed batch {} of {}", i + 1, total);
    }

    all
}

/// Left-join the stars with their designations on the HIP number
///
/// Stars without a match keep empty name fields. When a star has several
/// designation rows the last one wins.
pub fn merge(stars: &[StarRecord], designations: &[Designations]) -> Vec<NamedStarRecord> {
    let by_hip: HashMap<HipId, &Designations> =
        designations.iter().map(|d| (d.hip, d)).collect();

    stars
        .iter()
        .map(|star| {
            let mut named = NamedStarRecord::unnamed(star);
            if let Some(d) = by_hip.get(&star.hip_id) {
                named.name = d.name.clone();
                named.bayer = d.bayer.clone();
                named.flamsteed = d.flamsteed.clone();
            }
            named
        })
        .collect()
}

/// Read the filtered catalogue, look up designations, write the named catalogue
pub fn add_designations<P, Q, S>(
    input: P,
    output: Q,
    source: &S,
    settings: &Settings,
) -> Result<DesignationStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: DesignationSource + ?Sized,
{
    let stars = read_filtered_csv(&input)?;
    let hip_ids: Vec<HipId> = stars.iter().map(|s| s.hip_id).collect();

    if let (Some(min), Some(max)) = (hip_ids.iter().min(), hip_ids.iter().max()) {
        log::info!("Looking up {} stars, HIP {} to HIP {}", hip_ids.len(), min, max);
    }

    let designations = enrich(source, &hip_ids, settings);
    let stats = DesignationStats::from_designations(&designations);

    let merged = merge(&stars, &designations);
    write_csv(&merged, &output)?;
    log::info!(
        "Star names and designations saved to {}",
        output.as_ref().display()
    );

    Ok(stats)
}
