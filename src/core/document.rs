//! Host-side abstractions an extraction runs against: the edited document and
//! the prompt asking for a key suffix.

use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use super::ExtractError;

/// An editable source text with an optional selection.
pub trait Document: Send {
    fn path(&self) -> &Path;

    fn text(&self) -> &str;

    /// Selected byte range, `None` when nothing is selected.
    fn selection(&self) -> Option<Range<usize>>;

    /// File extension without the dot, used to pick a processor.
    fn language(&self) -> Option<&str> {
        self.path().extension().and_then(|ext| ext.to_str())
    }

    /// Replace `range` with `replacement`.
    fn replace(&mut self, range: Range<usize>, replacement: &str);
}

/// A file loaded into memory. Edits stay in memory until [`FileDocument::save`].
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    text: String,
    selection: Option<Range<usize>>,
}

impl FileDocument {
    pub fn open(path: &Path) -> Result<Self, ExtractError> {
        let text = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        Ok(Self::from_text(path, text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            selection: None,
        }
    }

    /// Select characters `range.start..range.end` (counted in chars, not bytes).
    ///
    /// An empty range clears the selection.
    pub fn select_chars(&mut self, range: Range<usize>) -> Result<(), ExtractError> {
        if range.start > range.end {
            return Err(ExtractError::InvalidSelection(format!(
                "start {} is after end {}",
                range.start, range.end
            )));
        }
        let start = self.char_to_byte(range.start)?;
        let end = self.char_to_byte(range.end)?;
        self.selection = (start < end).then_some(start..end);
        Ok(())
    }

    /// Select the `occurrence`-th (1-based) occurrence of `needle`.
    pub fn select_text(&mut self, needle: &str, occurrence: usize) -> Result<(), ExtractError> {
        if needle.is_empty() {
            self.selection = None;
            return Ok(());
        }
        let start = self
            .text
            .match_indices(needle)
            .nth(occurrence.saturating_sub(1))
            .map(|(index, _)| index)
            .ok_or_else(|| {
                ExtractError::InvalidSelection(format!(
                    "occurrence {} of \"{}\" not found",
                    occurrence, needle
                ))
            })?;
        self.selection = Some(start..start + needle.len());
        Ok(())
    }

    pub fn save(&self) -> Result<(), ExtractError> {
        fs::write(&self.path, &self.text).map_err(|e| ExtractError::io(&self.path, e))
    }

    fn char_to_byte(&self, char_index: usize) -> Result<usize, ExtractError> {
        let char_count = self.text.chars().count();
        if char_index > char_count {
            return Err(ExtractError::InvalidSelection(format!(
                "offset {} is past the end of the file ({} characters)",
                char_index, char_count
            )));
        }
        Ok(self
            .text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(byte, _)| byte))
    }
}

impl Document for FileDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    fn replace(&mut self, range: Range<usize>, replacement: &str) {
        self.text.replace_range(range.clone(), replacement);
        self.selection = Some(range.start..range.start + replacement.len());
    }
}

/// Source of the key suffix for a new entry.
pub trait KeyPrompt: Send {
    /// Ask for a suffix. `suggestion` is derived from the extracted value.
    /// `None` or blank input cancels the extraction.
    fn ask(&mut self, suggestion: &str) -> Option<String>;
}

/// Always answers with the same suffix.
#[derive(Debug, Clone)]
pub struct FixedKey(pub String);

impl KeyPrompt for FixedKey {
    fn ask(&mut self, _suggestion: &str) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Accepts the suggested suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoKey;

impl KeyPrompt for AutoKey {
    fn ask(&mut self, suggestion: &str) -> Option<String> {
        Some(suggestion.to_string())
    }
}
