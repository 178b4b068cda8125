//! High-level table generation API.
//!
//! Packages the three pipeline stages (download, parse, emit) behind one
//! options struct and entry function. The stages stay independently callable
//! through the [`fetch`](crate::fetch), [`ucd`](crate::ucd), and
//! [`header`](crate::header) modules.

use std::path::PathBuf;

use crate::error::Result;
use crate::fetch::{self, UNICODE_DATA_URL};
use crate::header;
use crate::ucd;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// URL of UnicodeData.txt.
    pub url: String,

    /// Where the downloaded copy is written, and read back from.
    pub data_path: PathBuf,

    /// Where the generated header is written.
    pub header_path: PathBuf,

    /// Skip the download and parse an existing `data_path` instead.
    /// Lets tests and offline runs work from a fixture file.
    pub skip_download: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            url: UNICODE_DATA_URL.to_string(),
            data_path: PathBuf::from("UnicodeData.txt"),
            header_path: PathBuf::from("unicode_mappings.h"),
            skip_download: false,
        }
    }
}

/// Entry counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Entries in the emitted toLower array.
    pub to_lower: usize,

    /// Entries in the emitted toUpper array.
    pub to_upper: usize,
}

/// Runs the full pipeline: download (unless skipped), parse, emit.
///
/// # Example
/// ```ignore
/// use casetab_core::high_level::{GenerateOptions, generate};
///
/// let summary = generate(&GenerateOptions::default())?;
/// println!("{} lowercase mappings", summary.to_lower);
/// ```
pub fn generate(options: &GenerateOptions) -> Result<GenerateSummary> {
    if !options.skip_download {
        fetch::download_to(&options.url, &options.data_path)?;
    }

    let tables = ucd::parse_file(&options.data_path)?;
    header::generate_header_file(&options.header_path, &tables)?;

    Ok(GenerateSummary {
        to_lower: tables.to_lower.len(),
        to_upper: tables.to_upper.len(),
    })
}
