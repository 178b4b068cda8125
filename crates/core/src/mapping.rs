//! Case-conversion mapping tables extracted from UnicodeData.txt.

/// One simple case mapping: `source` converts to `target`.
///
/// Both halves are raw codepoint values. Valid Unicode codepoints end at
/// U+10FFFF, so a `u32` holds them with room to spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMapping {
    pub source: u32,
    pub target: u32,
}

/// The two mapping tables produced by one parse of UnicodeData.txt.
///
/// `to_lower` holds codepoints with a simple lowercase mapping, `to_upper`
/// those with a simple uppercase mapping. The parser appends entries in
/// file-encounter order; [`sort`](Self::sort) orders them for emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseMappingTables {
    pub to_lower: Vec<CaseMapping>,
    pub to_upper: Vec<CaseMapping>,
}

impl CaseMappingTables {
    /// Sorts both tables ascending by source codepoint.
    ///
    /// The sort is stable and keyed on `source` only. UnicodeData.txt never
    /// repeats a codepoint, so ties cannot occur in real data; if one ever
    /// did, encounter order would be preserved.
    pub fn sort(&mut self) {
        self.to_lower.sort_by_key(|m| m.source);
        self.to_upper.sort_by_key(|m| m.source);
    }
}

/// Binary-searches a table sorted by source codepoint.
///
/// Returns the conversion target, or `None` when `codepoint` has no entry.
/// This is how the emitted arrays are meant to be consumed, and why the
/// emitter keeps them sorted.
pub fn lookup(table: &[CaseMapping], codepoint: u32) -> Option<u32> {
    match table.binary_search_by(|m| m.source.cmp(&codepoint)) {
        Ok(i) => Some(table[i].target),
        Err(_) => None,
    }
}
