use std::path::PathBuf;

use tracing::{debug, warn};

use super::{KeyMatch, LocaleEntry, scan::parse_locale_file};

/// Reverse-lookup index over an explicit list of YAML files.
///
/// Unlike [`LocaleStore`](super::LocaleStore), files are searched in the
/// order they were configured and entries keep document order, so the first
/// definition of a string wins.
#[derive(Debug, Default)]
pub struct BaseFileIndex {
    entries: Vec<LocaleEntry>,
}

impl BaseFileIndex {
    pub fn load(files: &[PathBuf]) -> Self {
        let mut entries = Vec::new();
        for file in files {
            match parse_locale_file(file) {
                Ok(file_entries) => {
                    debug!(
                        "Loaded {} entries from base file {}",
                        file_entries.len(),
                        file.display()
                    );
                    entries.extend(file_entries);
                }
                Err(warning) => {
                    warn!("Skipping base file {}: {}", warning.path, warning.error);
                }
            }
        }
        Self { entries }
    }

    /// Key of the first leaf equal to `text`, without its locale segment.
    pub fn key_for_text(&self, text: &str) -> Option<KeyMatch> {
        self.entries
            .iter()
            .find(|entry| entry.value == text)
            .map(|entry| KeyMatch {
                key: strip_locale(&entry.key).to_string(),
                source_file: entry.source_file.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `es.models.user.name` -> `models.user.name`
pub fn strip_locale(key: &str) -> &str {
    key.split_once('.').map_or(key, |(_, rest)| rest)
}
