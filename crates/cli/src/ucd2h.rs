//! ucd2h - Generate a C header of Unicode case mappings
//!
//! A command line tool that downloads UnicodeData.txt and emits the simple
//! case-conversion mappings as two sorted static arrays in a C header.

use casetab_core::error::Result;
use casetab_core::{fetch, header, ucd};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// A command line tool that downloads UnicodeData.txt and emits the simple
/// case-conversion mappings as two sorted static arrays in a C header.
#[derive(Parser, Debug)]
#[command(name = "ucd2h")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// URL of the UnicodeData.txt file to download
    #[arg(short = 'u', long, default_value = fetch::UNICODE_DATA_URL)]
    url: String,

    /// Path where the downloaded UnicodeData.txt is saved
    #[arg(long = "data-file", default_value = "UnicodeData.txt")]
    data_file: PathBuf,

    /// Path of the generated header
    #[arg(short = 'o', long, default_value = "unicode_mappings.h")]
    outfile: PathBuf,

    /// Skip the download and parse an existing data file
    #[arg(short = 's', long = "skip-download", action = ArgAction::SetTrue)]
    skip_download: bool,
}

/// Run the three pipeline stages with per-stage confirmations.
fn run(args: &Args) -> Result<()> {
    if args.skip_download {
        println!("Skipping download, using {}", args.data_file.display());
    } else {
        fetch::download_to(&args.url, &args.data_file)?;
        println!("Successfully downloaded {}", args.data_file.display());
    }

    let tables = ucd::parse_file(&args.data_file)?;
    header::generate_header_file(&args.outfile, &tables)?;
    println!(
        "Header file successfully generated: {} ({} toLower, {} toUpper entries)",
        args.outfile.display(),
        tables.to_lower.len(),
        tables.to_upper.len()
    );

    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if args.skip_download && !args.data_file.exists() {
        eprintln!("Error: File not found: {}", args.data_file.display());
        std::process::exit(1);
    }

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) if e.is_download_error() => {
            eprintln!("Error downloading file: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
