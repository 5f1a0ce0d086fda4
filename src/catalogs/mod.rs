//! Star catalogue records
//!
//! Rows are flat and keyed by their Hipparcos number. The column names of
//! each struct are the CSV headers used between stages.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::Result;

pub mod hipparcos;

pub use hipparcos::{filter_rows, process_catalogue, RawHipparcosRow};

/// Hipparcos catalogue number
pub type HipId = u32;

/// A star after column selection: position, magnitude and colour index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Hipparcos identifier
    pub hip_id: HipId,
    /// Right ascension in degrees (ICRS)
    pub ra: Option<f64>,
    /// Declination in degrees (ICRS)
    pub dec: Option<f64>,
    /// Johnson V magnitude
    pub vmag: Option<f64>,
    /// B-V colour index
    pub bv: Option<f64>,
}

/// A star joined with its proper name and designations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedStarRecord {
    pub hip_id: HipId,
    pub ra: Option<f64>,
    pub dec: Option<f64>,
    pub vmag: Option<f64>,
    pub bv: Option<f64>,
    /// Proper name, empty when the star has none
    #[serde(default)]
    pub name: String,
    /// Bayer designation such as `alf CMa`
    #[serde(default)]
    pub bayer: String,
    /// Flamsteed designation such as `9 CMa`
    #[serde(default)]
    pub flamsteed: String,
}

impl NamedStarRecord {
    /// Star without any designation
    pub fn unnamed(star: &StarRecord) -> Self {
        Self {
            hip_id: star.hip_id,
            ra: star.ra,
            dec: star.dec,
            vmag: star.vmag,
            bv: star.bv,
            name: String::new(),
            bayer: String::new(),
            flamsteed: String::new(),
        }
    }
}

/// Read every row of a CSV file with headers into `T`
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Write rows to any writer as CSV with a header line
pub fn write_csv_to<T, W>(rows: &[T], writer: W) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows to a CSV file, creating parent directories as needed
pub fn write_csv<T, P>(rows: &[T], path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_csv_to(rows, io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_star_record_csv_blank_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stars.csv");
        std::fs::write(&path, "hip_id,ra,dec,vmag,bv\n1,0.5,1.25,9.1,\n2,,,,\n").unwrap();

        let rows: Vec<StarRecord> = read_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].hip_id, 1);
        assert_eq!(rows[0].ra, Some(0.5));
        assert_eq!(rows[0].bv, None);
        assert_eq!(rows[1].vmag, None);
    }

    #[test]
    fn test_named_record_header_order() {
        let star = StarRecord {
            hip_id: 32349,
            ra: Some(101.28715533),
            dec: Some(-16.71611586),
            vmag: Some(-1.44),
            bv: Some(0.009),
        };
        let mut named = NamedStarRecord::unnamed(&star);
        named.name = "Sirius".to_string();

        let mut out = Vec::new();
        write_csv_to(&[named], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("hip_id,ra,dec,vmag,bv,name,bayer,flamsteed")
        );
        assert_eq!(
            lines.next(),
            Some("32349,101.28715533,-16.71611586,-1.44,0.009,Sirius,,")
        );
    }

    #[test]
    fn test_write_csv_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let rows = vec![StarRecord {
            hip_id: 7,
            ra: None,
            dec: None,
            vmag: None,
            bv: None,
        }];
        write_csv(&rows, &path).unwrap();
        let back: Vec<StarRecord> = read_csv(&path).unwrap();
        assert_eq!(back, rows);
    }
}
