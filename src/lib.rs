//! Starprep: offline tooling for building a static star catalogue
//!
//! The crate is a set of small batch stages that turn the Hipparcos catalogue
//! into the CSV files consumed by a star-rendering application:
//!
//! 1. download `hip_main.dat` from CDS and convert it to CSV
//! 2. select and rename the columns the renderer needs
//! 3. look up proper names and Bayer/Flamsteed designations on SIMBAD
//! 4. turn a blackbody colour table into `Color32` literals
//!
//! plus generators for the ecliptic, the galactic equator and the IAU
//! constellation boundaries. Each stage has a binary under `src/bin`.

use thiserror::Error;

pub mod catalogs;
pub mod cli;
pub mod colours;
pub mod config;
pub mod constants;
pub mod constellations;
pub mod coordinates;
pub mod data;
pub mod designations;
pub mod logging;
pub mod sky_lines;

// Re-export commonly used types
pub use catalogs::{NamedStarRecord, StarRecord};
pub use config::Settings;
pub use designations::{DesignationSource, Designations, SimbadClient};

/// Main error type for the starprep library
#[derive(Debug, Error)]
pub enum StarprepError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Colour table line {line}: {message}")]
    ColourTableError { line: usize, message: String },

    #[error("Lookup service error: {0}")]
    LookupError(String),
}

/// Result type for starprep operations
pub type Result<T> = std::result::Result<T, StarprepError>;
