//! Finds `I18n.t('...')` calls in a source text and resolves their keys.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use super::locale::{LocaleStore, find_key_line};

static I18N_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"I18n\.t\(\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)"#).unwrap()
});

/// A literal key passed to `I18n.t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub key: String,
    /// 1-based line of the call.
    pub line: usize,
    /// 1-based character column of the call.
    pub col: usize,
}

/// A [`KeyUsage`] looked up in the locale store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUsage {
    pub key: String,
    pub line: usize,
    pub col: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_file: Option<PathBuf>,
    /// Line of the key in `locale_file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_line: Option<usize>,
}

impl ResolvedUsage {
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }
}

/// Every literal-key `I18n.t` call in `text`, in source order.
///
/// Keys built with `#{}` interpolation are skipped.
pub fn find_usages(text: &str) -> Vec<KeyUsage> {
    let line_starts: Vec<usize> = std::iter::once(0)
        .chain(text.match_indices('\n').map(|(index, _)| index + 1))
        .collect();

    I18N_CALL_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let key = caps.get(1).or(caps.get(2)).or(caps.get(3))?.as_str();
            if key.contains("#{") {
                return None;
            }
            let line_index = line_starts
                .partition_point(|&start| start <= whole.start())
                .saturating_sub(1);
            let col = text[line_starts[line_index]..whole.start()].chars().count() + 1;
            Some(KeyUsage {
                key: key.to_string(),
                line: line_index + 1,
                col,
            })
        })
        .collect()
}

/// Resolve each usage through the store's locale variants.
pub fn resolve_usages(usages: &[KeyUsage], store: &LocaleStore) -> Vec<ResolvedUsage> {
    let mut contents: HashMap<PathBuf, Option<String>> = HashMap::new();

    usages
        .iter()
        .map(|usage| {
            let entry = store.find_by_suffix(&usage.key);
            let locale_line = entry.as_ref().and_then(|entry| {
                let content = contents
                    .entry(entry.source_file.clone())
                    .or_insert_with(|| read_locale_file(&entry.source_file));
                content
                    .as_deref()
                    .and_then(|content| find_key_line(content, &entry.key))
            });

            ResolvedUsage {
                key: usage.key.clone(),
                line: usage.line,
                col: usage.col,
                value: entry.as_ref().map(|entry| entry.value.clone()),
                locale_file: entry.map(|entry| entry.source_file),
                locale_line,
            }
        })
        .collect()
}

fn read_locale_file(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .inspect_err(|err| warn!("Failed to read {}: {}", path.display(), err))
        .ok()
}
