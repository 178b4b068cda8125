//! UnicodeData.txt retrieval.
//!
//! One blocking HTTP GET per run. Any transport failure or non-2xx status
//! fails the whole run; there are no retries, timeouts, or cached downloads.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, UcdError};

/// Versioned location of the UnicodeData.txt file casetab is built against.
pub const UNICODE_DATA_URL: &str = "https://www.unicode.org/Public/16.0.0/ucd/UnicodeData.txt";

/// Fetches `url` and returns the response body as text.
pub fn fetch_text(url: &str) -> Result<String> {
    let response = ureq::get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => UcdError::HttpStatus {
            url: url.to_string(),
            status,
        },
        other => UcdError::Transport {
            url: url.to_string(),
            reason: other.to_string(),
        },
    })?;

    // A connection dropped mid-body is a download failure, not an io error
    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| UcdError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    tracing::debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}

/// Downloads `url` and writes the body verbatim to `dest` as UTF-8,
/// overwriting any existing content.
///
/// The body is buffered in full before `dest` is touched, so an existing
/// file survives a failed fetch.
pub fn download_to(url: &str, dest: &Path) -> Result<()> {
    let body = fetch_text(url)?;
    fs::write(dest, &body)?;
    tracing::info!(url, dest = %dest.display(), "downloaded");
    Ok(())
}
