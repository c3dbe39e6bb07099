//! Locale YAML documents: parsing, discovery, the in-memory index and writes.

mod finder;
mod lines;
mod scan;
mod store;
mod tree;
mod writer;

use std::path::PathBuf;

use serde::Serialize;

pub use finder::{BaseFileIndex, strip_locale};
pub use lines::find_key_line;
pub use scan::{ScanOptions, ScanResult, ScanWarning, parse_locale_file, scan_locale_files};
pub use store::{LoadState, LoadSummary, LocaleStore};
pub use tree::{KeyAction, LocaleNode, LocaleTree};
pub use writer::{LocaleWriter, merge_write};

/// One flattened string of a locale document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    /// Full dotted key, including the locale segment.
    pub key: String,
    pub value: String,
    pub source_file: PathBuf,
}

/// Result of a reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    /// Key without the locale segment.
    pub key: String,
    pub source_file: PathBuf,
}
