//! Hipparcos catalogue handling
//!
//! This module reads the CDS `hip_main.dat` file, converts it to a CSV with
//! the database's column names, and reduces that CSV to the columns the
//! renderer needs.

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{read_csv, write_csv, HipId, StarRecord};
use crate::coordinates::{parse_dms, parse_hms};
use crate::Result;
use crate::StarprepError;

/// Minimum length of a usable `hip_main.dat` record
const MIN_LINE_LEN: usize = 110;

/// Row of the downloaded catalogue, named like the VizieR columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHipparcosRow {
    #[serde(rename = "HIP")]
    pub hip: HipId,
    #[serde(rename = "_RA.icrs")]
    pub ra: Option<f64>,
    #[serde(rename = "_DE.icrs")]
    pub dec: Option<f64>,
    #[serde(rename = "Vmag")]
    pub vmag: Option<f64>,
    #[serde(rename = "B-V")]
    pub b_v: Option<f64>,
    /// Parallax (mas)
    #[serde(rename = "Plx", default)]
    pub parallax: Option<f64>,
    /// Proper motion in RA (mas/year)
    #[serde(rename = "pmRA", default)]
    pub pm_ra: Option<f64>,
    /// Proper motion in declination (mas/year)
    #[serde(rename = "pmDE", default)]
    pub pm_dec: Option<f64>,
}

impl From<&RawHipparcosRow> for StarRecord {
    fn from(row: &RawHipparcosRow) -> Self {
        StarRecord {
            hip_id: row.hip,
            ra: row.ra,
            dec: row.dec,
            vmag: row.vmag,
            bv: row.b_v,
        }
    }
}

fn parse_field(fields: &[&str], index: usize) -> Option<f64> {
    fields.get(index).and_then(|s| s.trim().parse::<f64>().ok())
}

/// Parse one pipe-separated record of `hip_main.dat`
///
/// Decimal RA/Dec (fields 8 and 9) are blank for a few hundred stars
/// without an astrometric solution; the sexagesimal fields 3 and 4 are
/// used for those.
pub fn parse_dat_line(line: &str) -> Option<RawHipparcosRow> {
    if line.trim().is_empty() || line.len() < MIN_LINE_LEN {
        return None;
    }

    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 10 {
        return None;
    }

    let hip = fields[1].trim().parse::<HipId>().ok()?;

    let ra = parse_field(&fields, 8).or_else(|| parse_hms(fields[3]));
    let dec = parse_field(&fields, 9).or_else(|| parse_dms(fields[4]));

    Some(RawHipparcosRow {
        hip,
        ra,
        dec,
        vmag: parse_field(&fields, 5),
        b_v: parse_field(&fields, 37),
        parallax: parse_field(&fields, 11),
        pm_ra: parse_field(&fields, 12),
        pm_dec: parse_field(&fields, 13),
    })
}

/// Open a catalogue file, transparently decompressing `.gz`
fn open_catalogue<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let file = File::open(&path)?;
    if file.metadata()?.len() == 0 {
        return Err(StarprepError::DataError(format!(
            "Hipparcos data file is empty: {}",
            path.as_ref().display()
        )));
    }

    let is_gz = path.as_ref().extension().is_some_and(|ext| ext == "gz");
    if is_gz {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read every usable record of a `hip_main.dat` (or `.dat.gz`) file
pub fn read_dat<P: AsRef<Path>>(path: P) -> Result<Vec<RawHipparcosRow>> {
    let reader = open_catalogue(&path)?;

    let mut rows = Vec::new();
    let mut line_count = 0;
    let mut skipped_lines = 0;

    for line in reader.lines() {
        let line = line?;
        line_count += 1;

        match parse_dat_line(&line) {
            Some(row) => rows.push(row),
            None => {
                log::debug!("Skipping line {}: not a catalogue record", line_count);
                skipped_lines += 1;
            }
        }
    }

    if rows.is_empty() {
        return Err(StarprepError::DataError(format!(
            "No stars loaded from {} (read {} lines, skipped {})",
            path.as_ref().display(),
            line_count,
            skipped_lines
        )));
    }

    if skipped_lines > 0 {
        log::warn!(
            "Skipped {} of {} lines in {}",
            skipped_lines,
            line_count,
            path.as_ref().display()
        );
    }
    log::info!("Read {} stars from {}", rows.len(), path.as_ref().display());
    Ok(rows)
}

/// Write the raw catalogue CSV
pub fn write_raw_csv<P: AsRef<Path>>(rows: &[RawHipparcosRow], path: P) -> Result<()> {
    write_csv(rows, path)
}

/// Read the raw catalogue CSV
pub fn read_raw_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawHipparcosRow>> {
    read_csv(path)
}

/// Select and rename the renderer's columns
///
/// `HIP -> hip_id`, `_RA.icrs -> ra`, `_DE.icrs -> dec`, `Vmag -> vmag`,
/// `B-V -> bv`. Values and row order are kept.
pub fn filter_rows(raw: &[RawHipparcosRow]) -> Vec<StarRecord> {
    raw.iter().map(StarRecord::from).collect()
}

/// Read the filtered catalogue CSV
pub fn read_filtered_csv<P: AsRef<Path>>(path: P) -> Result<Vec<StarRecord>> {
    read_csv(path)
}

/// Write the filtered catalogue CSV (`hip_id,ra,dec,vmag,bv`)
pub fn write_filtered_csv<P: AsRef<Path>>(rows: &[StarRecord], path: P) -> Result<()> {
    write_csv(rows, path)
}

/// Reduce the raw catalogue CSV at `input` to the filtered CSV at `output`
pub fn process_catalogue<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let raw = read_raw_csv(&input)?;
    let filtered = filter_rows(&raw);
    write_filtered_csv(&filtered, &output)?;
    log::info!(
        "Filtered {} rows from {} into {}",
        filtered.len(),
        input.as_ref().display(),
        output.as_ref().display()
    );
    Ok(filtered.len())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::tempdir;

    /// Build a `hip_main.dat` style record with the given fields filled in
    pub(crate) fn dat_line(
        hip: &str,
        ra_hms: &str,
        de_dms: &str,
        vmag: &str,
        ra_deg: &str,
        de_deg: &str,
        b_v: &str,
    ) -> String {
        let mut fields = vec![String::new(); 78];
        fields[0] = "H".to_string();
        fields[1] = format!("{:>12}", hip);
        fields[3] = ra_hms.to_string();
        fields[4] = de_dms.to_string();
        fields[5] = format!("{:>5}", vmag);
        fields[8] = format!("{:>12}", ra_deg);
        fields[9] = format!("{:>12}", de_deg);
        fields[11] = "  379.21".to_string();
        fields[12] = " -546.01".to_string();
        fields[13] = "-1223.08".to_string();
        fields[37] = format!("{:>6}", b_v);
        fields.join("|")
    }

    fn sirius_line() -> String {
        dat_line(
            "32349",
            "06 45 09.25",
            "-16 42 47.3",
            "-1.44",
            "101.28715539",
            "-16.71611582",
            "0.009",
        )
    }

    #[test]
    fn test_parse_dat_line() {
        let row = parse_dat_line(&sirius_line()).unwrap();
        assert_eq!(row.hip, 32349);
        assert_eq!(row.ra, Some(101.28715539));
        assert_eq!(row.dec, Some(-16.71611582));
        assert_eq!(row.vmag, Some(-1.44));
        assert_eq!(row.b_v, Some(0.009));
        assert_eq!(row.parallax, Some(379.21));
        assert_eq!(row.pm_ra, Some(-546.01));
        assert_eq!(row.pm_dec, Some(-1223.08));
    }

    #[test]
    fn test_parse_dat_line_sexagesimal_fallback() {
        let line = dat_line("55", "00 11 15.86", "-35 07 59.2", "9.13", "", "", "");
        let row = parse_dat_line(&line).unwrap();
        let ra = row.ra.unwrap();
        let dec = row.dec.unwrap();
        assert!((ra - 2.816_083).abs() < 1e-5);
        assert!((dec + 35.133_111).abs() < 1e-5);
        assert_eq!(row.b_v, None);
    }

    #[test]
    fn test_parse_dat_line_rejects_garbage() {
        assert!(parse_dat_line("").is_none());
        assert!(parse_dat_line("H|1|short").is_none());
        let bad_hip = sirius_line().replacen("       32349", "       ABCDE", 1);
        assert!(parse_dat_line(&bad_hip).is_none());
    }

    #[test]
    fn test_read_dat_plain_and_gz() {
        let dir = tempdir().unwrap();
        let content = format!("{}\n\nnot a record\n", sirius_line());

        let plain = dir.path().join("hip_main.dat");
        std::fs::write(&plain, &content).unwrap();
        let rows = read_dat(&plain).unwrap();
        assert_eq!(rows.len(), 1);

        let gz = dir.path().join("hip_main.dat.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
        let rows_gz = read_dat(&gz).unwrap();
        assert_eq!(rows, rows_gz);
    }

    #[test]
    fn test_read_dat_errors() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.dat");
        std::fs::write(&empty, "").unwrap();
        assert!(matches!(read_dat(&empty), Err(StarprepError::DataError(_))));

        let junk = dir.path().join("junk.dat");
        std::fs::write(&junk, "nothing useful\n").unwrap();
        assert!(matches!(read_dat(&junk), Err(StarprepError::DataError(_))));
    }

    #[test]
    fn test_filter_preserves_values() {
        let raw = vec![
            RawHipparcosRow {
                hip: 91262,
                ra: Some(279.23410832),
                dec: Some(38.78299311),
                vmag: Some(0.03),
                b_v: Some(-0.001),
                parallax: Some(128.93),
                pm_ra: Some(201.02),
                pm_dec: Some(287.46),
            },
            RawHipparcosRow {
                hip: 1,
                ra: None,
                dec: Some(1.08901332),
                vmag: None,
                b_v: None,
                parallax: None,
                pm_ra: None,
                pm_dec: None,
            },
        ];

        let filtered = filter_rows(&raw);
        assert_eq!(filtered.len(), raw.len());
        for (r, f) in raw.iter().zip(&filtered) {
            assert_eq!(f.hip_id, r.hip);
            assert_eq!(f.ra, r.ra);
            assert_eq!(f.dec, r.dec);
            assert_eq!(f.vmag, r.vmag);
            assert_eq!(f.bv, r.b_v);
        }
    }

    #[test]
    fn test_process_catalogue_renames_columns() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("hipparcos_catalogue.csv");
        let output = dir.path().join("hipparcos_filtered.csv");
        // Extra columns in any order are dropped
        std::fs::write(
            &input,
            "recno,HIP,Vmag,_RA.icrs,_DE.icrs,B-V,Plx\n\
             1,1,9.10,0.00091185,1.08901332,0.482,3.54\n\
             2,2,9.27,0.00379737,-19.49883745,0.999,21.90\n",
        )
        .unwrap();

        let count = process_catalogue(&input, &output).unwrap();
        assert_eq!(count, 2);

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "hip_id,ra,dec,vmag,bv");
        assert_eq!(lines[1], "1,0.00091185,1.08901332,9.1,0.482");
        assert_eq!(lines[2], "2,0.00379737,-19.49883745,9.27,0.999");
    }
}
