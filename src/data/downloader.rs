//! Downloader module for retrieving the Hipparcos catalogue
//!
//! The catalogue is fetched once from the CDS archive and reused while the
//! file is present and non-empty.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalogs::hipparcos::{read_dat, write_raw_csv};
use crate::constants::HIPPARCOS_CATALOGUE_ID;
use crate::{Result, Settings, StarprepError};

/// Record of a completed catalogue download, written next to the CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadSummary {
    /// Catalogue identifier at CDS
    pub catalogue: String,
    /// URL the data came from
    pub source_url: String,
    /// RFC 3339 timestamp of the conversion
    pub downloaded_at: String,
    /// Number of stars written
    pub star_count: usize,
    /// Path of the raw catalogue CSV
    pub output: PathBuf,
}

/// Check if a file exists and is not empty
pub fn file_exists_and_not_empty<P: AsRef<Path>>(path: P) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.len() > 0,
        Err(_) => false,
    }
}

/// Manifest path for a catalogue CSV (`foo.csv` -> `foo.json`)
pub fn manifest_path<P: AsRef<Path>>(csv_path: P) -> PathBuf {
    csv_path.as_ref().with_extension("json")
}

/// Stream `reader` into `path` through a temporary file
///
/// The temporary file is removed if reading or writing fails, so `path` only
/// ever holds a complete download.
fn write_through_temp<R: Read, P: AsRef<Path>>(
    mut reader: R,
    path: P,
    total_size: u64,
) -> Result<u64> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.as_ref().with_extension("tmp");
    let mut file = BufWriter::new(File::create(&temp_path)?);

    let written = copy_with_progress(&mut reader, &mut file, total_size).and_then(|n| {
        file.flush()?;
        Ok(n)
    });
    drop(file);

    match written {
        Ok(n) => {
            fs::rename(&temp_path, path)?;
            Ok(n)
        }
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            Err(e)
        }
    }
}

fn copy_with_progress<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    total_size: u64,
) -> Result<u64> {
    let mut downloaded: u64 = 0;
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        writer.write_all(&buffer[..bytes_read])?;
        downloaded += bytes_read as u64;

        // Report every 5MB
        if downloaded % (5 * 1024 * 1024) < bytes_read as u64 {
            if total_size > 0 {
                log::info!(
                    "Downloaded {:.1}MB of {:.1}MB",
                    downloaded as f64 / 1024.0 / 1024.0,
                    total_size as f64 / 1024.0 / 1024.0
                );
            } else {
                log::info!("Downloaded {:.1}MB", downloaded as f64 / 1024.0 / 1024.0);
            }
        }
    }

    Ok(downloaded)
}

/// Download a file from URL to a local path
fn download_file<P: AsRef<Path>>(url: &str, path: P, timeout: Duration) -> Result<u64> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(StarprepError::DataError(format!(
            "Failed to download {}, status: {}",
            url,
            response.status()
        )));
    }

    let total_size = response.content_length().unwrap_or(0);
    write_through_temp(response, path, total_size)
}

/// Make sure `hip_main.dat` is present locally and return its path
pub fn download_hipparcos(settings: &Settings) -> Result<PathBuf> {
    let dat_path = settings.dat_path();

    if !settings.force_download && file_exists_and_not_empty(&dat_path) {
        log::info!("Using existing Hipparcos catalogue at {}", dat_path.display());
        return Ok(dat_path);
    }

    log::info!("Downloading Hipparcos catalogue from {}", settings.catalogue_url);
    match download_file(&settings.catalogue_url, &dat_path, settings.http_timeout()) {
        Ok(bytes) => {
            log::info!(
                "Hipparcos catalogue downloaded to {} ({} bytes)",
                dat_path.display(),
                bytes
            );
            Ok(dat_path)
        }
        Err(e) => {
            log::error!("Failed to download Hipparcos catalogue: {}", e);
            Err(e)
        }
    }
}

/// "There is 1 available catalogue" / "There are 2 available catalogues"
pub fn availability_message(count: usize) -> String {
    let (be, plural) = if count == 1 { ("is", "") } else { ("are", "s") };
    format!("There {} {} available catalogue{}", be, count, plural)
}

/// Convert a local `hip_main.dat` into the raw catalogue CSV and manifest
pub fn convert_catalogue<P: AsRef<Path>>(
    dat_path: P,
    settings: &Settings,
) -> Result<DownloadSummary> {
    let rows = read_dat(&dat_path)?;
    let output = settings.raw_catalogue_path();
    write_raw_csv(&rows, &output)?;

    let summary = DownloadSummary {
        catalogue: HIPPARCOS_CATALOGUE_ID.to_string(),
        source_url: settings.catalogue_url.clone(),
        downloaded_at: chrono::Utc::now().to_rfc3339(),
        star_count: rows.len(),
        output: output.clone(),
    };

    let manifest = File::create(manifest_path(&output))?;
    serde_json::to_writer_pretty(BufWriter::new(manifest), &summary)?;

    Ok(summary)
}

/// Download the catalogue and write `hipparcos_catalogue.csv`
pub fn download_catalogue(settings: &Settings) -> Result<DownloadSummary> {
    let dat_path = download_hipparcos(settings)?;
    convert_catalogue(dat_path, settings)
}
