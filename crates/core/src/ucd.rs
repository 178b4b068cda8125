//! UnicodeData.txt record parsing.
//!
//! A UnicodeData.txt record is one line of 15 semicolon-delimited fields
//! (no escaping, no quoting, no comments). Of those, only three are
//! consumed here: the codepoint, the simple uppercase mapping, and the
//! simple lowercase mapping. The two mapping fields are optional and empty
//! for most codepoints.

use std::fs;
use std::path::Path;

use crate::error::{Result, UcdError};
use crate::mapping::{CaseMapping, CaseMappingTables};

/// Fields in a well-formed UnicodeData.txt record.
const UNICODE_DATA_FIELD_COUNT: usize = 15;

/// Field 0: codepoint, hex.
const CODEPOINT_FIELD: usize = 0;

/// Field 12: simple uppercase mapping, hex, empty when absent.
const SIMPLE_UPPERCASE_FIELD: usize = 12;

/// Field 13: simple lowercase mapping, hex, empty when absent.
const SIMPLE_LOWERCASE_FIELD: usize = 13;

/// Parses a hex codepoint field. Malformed hex is fatal for the run.
fn parse_hex(text: &str, line: usize, field: usize) -> Result<u32> {
    u32::from_str_radix(text, 16).map_err(|_| UcdError::MalformedHex {
        line,
        field,
        text: text.to_string(),
    })
}

/// Extracts the case-mapping tables from UnicodeData.txt content.
///
/// Lines with fewer than 15 fields are skipped without error (the real file
/// ends with a blank line). Entries are appended in file-encounter order;
/// nothing is deduplicated and mapping targets are not cross-checked.
pub fn parse_str(text: &str) -> Result<CaseMappingTables> {
    let mut tables = CaseMappingTables::default();
    let mut skipped = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() < UNICODE_DATA_FIELD_COUNT {
            skipped += 1;
            continue;
        }

        let codepoint = parse_hex(fields[CODEPOINT_FIELD], line_no, CODEPOINT_FIELD)?;

        let lowercase = fields[SIMPLE_LOWERCASE_FIELD];
        if !lowercase.is_empty() {
            tables.to_lower.push(CaseMapping {
                source: codepoint,
                target: parse_hex(lowercase, line_no, SIMPLE_LOWERCASE_FIELD)?,
            });
        }

        let uppercase = fields[SIMPLE_UPPERCASE_FIELD];
        if !uppercase.is_empty() {
            tables.to_upper.push(CaseMapping {
                source: codepoint,
                target: parse_hex(uppercase, line_no, SIMPLE_UPPERCASE_FIELD)?,
            });
        }
    }

    tracing::debug!(
        to_lower = tables.to_lower.len(),
        to_upper = tables.to_upper.len(),
        skipped,
        "parsed UnicodeData records"
    );
    Ok(tables)
}

/// Reads a previously downloaded UnicodeData.txt and extracts the tables.
pub fn parse_file(path: &Path) -> Result<CaseMappingTables> {
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}
