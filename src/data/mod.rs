//! Data module for downloading the source catalogue
//!
//! This module fetches the Hipparcos catalogue and converts it into the CSV
//! consumed by the later stages.

mod downloader;

pub use downloader::{
    availability_message, convert_catalogue, download_catalogue, download_hipparcos,
    file_exists_and_not_empty, manifest_path, DownloadSummary,
};
