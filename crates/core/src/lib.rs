//! casetab - case-conversion table generation from the Unicode Character
//! Database.
//!
//! Downloads UnicodeData.txt, extracts the simple case mappings (fields 12
//! and 13), and emits them as sorted static arrays in a C header.

pub mod error;
pub mod fetch;
pub mod header;
pub mod high_level;
pub mod mapping;
pub mod ucd;

pub use error::{Result, UcdError};
pub use high_level::{GenerateOptions, GenerateSummary, generate};
pub use mapping::{CaseMapping, CaseMappingTables};
