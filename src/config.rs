//! Pipeline settings
//!
//! All stages share one [`Settings`] value. Defaults reproduce the file names
//! and constants of the catalogue build; a JSON file can override any subset
//! of fields.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;
use crate::Result;

/// Settings for every stage of the catalogue build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory all relative file names are resolved against
    pub work_dir: PathBuf,
    /// Where the downloaded `hip_main.dat` is kept
    pub dat_file: String,
    /// Raw catalogue CSV with the database column names
    pub raw_catalogue: String,
    /// Filtered catalogue CSV (`hip_id,ra,dec,vmag,bv`)
    pub filtered_catalogue: String,
    /// Filtered catalogue joined with designations
    pub named_catalogue: String,
    /// Blackbody colour table input
    pub colour_table: String,
    /// `Color32` literal output
    pub colour_output: String,
    /// Hipparcos download URL
    pub catalogue_url: String,
    /// SIMBAD TAP endpoint
    pub simbad_url: String,
    /// HTTP timeout in seconds
    pub http_timeout_s: u64,
    /// Identifiers per SIMBAD query
    pub chunk_size: usize,
    /// Pause after each SIMBAD query in milliseconds
    pub batch_delay_ms: u64,
    /// Sampling step for the sky lines in degrees
    pub sky_line_step_deg: u32,
    /// Re-download even when a catalogue file already exists
    pub force_download: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            dat_file: "hip_main.dat".to_string(),
            raw_catalogue: constants::RAW_CATALOGUE_FILE.to_string(),
            filtered_catalogue: constants::FILTERED_CATALOGUE_FILE.to_string(),
            named_catalogue: constants::NAMED_CATALOGUE_FILE.to_string(),
            colour_table: constants::COLOUR_TABLE_FILE.to_string(),
            colour_output: constants::COLOUR_OUTPUT_FILE.to_string(),
            catalogue_url: constants::HIPPARCOS_URL.to_string(),
            simbad_url: constants::SIMBAD_TAP_URL.to_string(),
            http_timeout_s: constants::HTTP_TIMEOUT_S,
            chunk_size: constants::CHUNK_SIZE,
            batch_delay_ms: constants::BATCH_DELAY_S * 1000,
            sky_line_step_deg: constants::SKY_LINE_STEP_DEG,
            force_download: false,
        }
    }
}

impl Settings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Set the working directory
    pub fn with_work_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.work_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the SIMBAD batch size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the pause between SIMBAD batches
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the great-circle sampling step
    pub fn with_sky_line_step(mut self, step_deg: u32) -> Self {
        self.sky_line_step_deg = step_deg;
        self
    }

    /// Force re-downloading the catalogue
    pub fn with_force_download(mut self, force: bool) -> Self {
        self.force_download = force;
        self
    }

    /// Resolve a file name against the working directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    pub fn dat_path(&self) -> PathBuf {
        self.path(&self.dat_file)
    }

    pub fn raw_catalogue_path(&self) -> PathBuf {
        self.path(&self.raw_catalogue)
    }

    pub fn filtered_catalogue_path(&self) -> PathBuf {
        self.path(&self.filtered_catalogue)
    }

    pub fn named_catalogue_path(&self) -> PathBuf {
        self.path(&self.named_catalogue)
    }

    pub fn colour_table_path(&self) -> PathBuf {
        self.path(&self.colour_table)
    }

    pub fn colour_output_path(&self) -> PathBuf {
        self.path(&self.colour_output)
    }

    /// Pause between SIMBAD batches
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    /// HTTP request timeout
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.chunk_size, 1000);
        assert_eq!(settings.batch_delay(), Duration::from_secs(2));
        assert_eq!(settings.filtered_catalogue, "hipparcos_filtered.csv");
        assert_eq!(
            settings.named_catalogue_path(),
            PathBuf::from("./hipparcos_data_with_names.csv")
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"chunk_size": 250, "work_dir": "/tmp/stars"}}"#).unwrap();

        let settings = Settings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.chunk_size, 250);
        assert_eq!(settings.work_dir, PathBuf::from("/tmp/stars"));
        assert_eq!(settings.batch_delay_ms, 2000);
        assert_eq!(settings.simbad_url, constants::SIMBAD_TAP_URL);
    }

    #[test]
    fn test_builder() {
        let settings = Settings::new()
            .with_chunk_size(10)
            .with_batch_delay(Duration::ZERO)
            .with_work_dir("data");
        assert_eq!(settings.chunk_size, 10);
        assert_eq!(settings.batch_delay(), Duration::ZERO);
        assert_eq!(settings.raw_catalogue_path(), PathBuf::from("data/hipparcos_catalogue.csv"));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Settings::from_json_file(file.path()).is_err());
    }
}
