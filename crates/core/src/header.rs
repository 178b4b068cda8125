//! C header emission for the extracted mapping tables.
//!
//! The artifact is a self-contained header: include guard, `<stdint.h>`
//! include, a two-field `UnicodeMapping` struct, and one static array per
//! table. Array entries are brace initializers with zero-padded 8-digit
//! uppercase hex literals, so every codepoint renders at a fixed width.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mapping::{CaseMapping, CaseMappingTables};

/// Writes one static array declaration with one entry per line.
fn write_table<W: Write>(out: &mut W, name: &str, entries: &[CaseMapping]) -> Result<()> {
    writeln!(out, "static const UnicodeMapping {}[] = {{", name)?;
    for m in entries {
        writeln!(out, "    {{0x{:08X}, 0x{:08X}}},", m.source, m.target)?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    Ok(())
}

/// Writes the complete header to `out`.
///
/// Both tables are emitted in ascending source-codepoint order regardless of
/// input order; repeated runs over the same tables produce identical bytes.
pub fn write_header<W: Write>(out: &mut W, tables: &CaseMappingTables) -> Result<()> {
    let mut sorted = tables.clone();
    sorted.sort();

    writeln!(out, "#ifndef UNICODE_MAPPINGS_H")?;
    writeln!(out, "#define UNICODE_MAPPINGS_H")?;
    writeln!(out)?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;
    writeln!(out, "typedef struct {{")?;
    writeln!(out, "    uint32_t source;")?;
    writeln!(out, "    uint32_t target;")?;
    writeln!(out, "}} UnicodeMapping;")?;
    writeln!(out)?;
    write_table(out, "toLower", &sorted.to_lower)?;
    write_table(out, "toUpper", &sorted.to_upper)?;
    writeln!(out, "#endif // UNICODE_MAPPINGS_H")?;
    Ok(())
}

/// Renders the header to `path`, overwriting any existing file.
pub fn generate_header_file(path: &Path, tables: &CaseMappingTables) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_header(&mut out, tables)?;
    out.flush()?;
    tracing::info!(
        path = %path.display(),
        to_lower = tables.to_lower.len(),
        to_upper = tables.to_upper.len(),
        "generated header"
    );
    Ok(())
}
