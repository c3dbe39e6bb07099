use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{LocaleEntry, tree::LocaleTree};

/// Where to look for base-locale documents.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directories searched recursively for locale directories.
    pub roots: Vec<PathBuf>,
    /// Explicit files loaded in addition to the discovered ones.
    pub files: Vec<PathBuf>,
    /// Trailing path that marks a locale directory, e.g. `config/locales`.
    pub locales_dir: PathBuf,
    /// File names accepted inside a locale directory, e.g. `^es.*\.yml$`.
    pub file_pattern: Regex,
    /// Glob patterns of paths never descended into.
    pub ignores: Vec<Pattern>,
}

impl ScanOptions {
    /// Pattern matching every file of `base_locale` and its regional variants.
    pub fn base_locale_pattern(base_locale: &str) -> Regex {
        Regex::new(&format!(r"^{}.*\.yml$", regex::escape(base_locale)))
            .unwrap_or_else(|_| Regex::new(r"\.yml$").unwrap())
    }
}

/// A file or directory that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: String,
    pub error: String,
}

/// Result of a full scan: entries in load order plus what was skipped.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub entries: Vec<LocaleEntry>,
    pub warnings: Vec<ScanWarning>,
}

/// Discover every base-locale file under the configured roots.
///
/// Directory entries are visited in file-name order and the final list is
/// sorted, so the load order (and "last file wins") is stable across runs.
pub fn discover_locale_files(options: &ScanOptions) -> (Vec<PathBuf>, Vec<ScanWarning>) {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for root in &options.roots {
        let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    warn!("Skipping unreadable path {}: {}", path, err);
                    warnings.push(ScanWarning {
                        path,
                        error: err.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }
            if is_ignored(entry.path(), root, &options.ignores) {
                walker.skip_current_dir();
                continue;
            }
            if entry.path().ends_with(&options.locales_dir) {
                debug!("Found locale directory {}", entry.path().display());
                collect_locale_dir(entry.path(), options, &mut files, &mut warnings);
                walker.skip_current_dir();
            }
        }
    }

    files.extend(options.files.iter().cloned());
    files.sort();
    files.dedup();
    (files, warnings)
}

fn collect_locale_dir(
    dir: &Path,
    options: &ScanOptions,
    files: &mut Vec<PathBuf>,
    warnings: &mut Vec<ScanWarning>,
) {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                let matches = entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| options.file_pattern.is_match(name));
                if entry.file_type().is_file() && matches {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| dir.display().to_string());
                warn!("Skipping unreadable path {}: {}", path, err);
                warnings.push(ScanWarning {
                    path,
                    error: err.to_string(),
                });
            }
        }
    }
}

fn is_ignored(path: &Path, root: &Path, ignores: &[Pattern]) -> bool {
    if ignores.is_empty() || path == root {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    // `**/node_modules/**` should also reject the directory itself.
    let probe = relative.join("_");
    ignores
        .iter()
        .any(|pattern| pattern.matches_path(relative) || pattern.matches_path(&probe))
}

/// Read and flatten one locale file.
pub fn parse_locale_file(path: &Path) -> Result<Vec<LocaleEntry>, ScanWarning> {
    let content = fs::read_to_string(path).map_err(|e| ScanWarning {
        path: path.display().to_string(),
        error: format!("Failed to read file: {}", e),
    })?;
    let tree = LocaleTree::parse(&content).map_err(|e| ScanWarning {
        path: path.display().to_string(),
        error: format!("Failed to parse YAML: {}", e),
    })?;

    Ok(tree
        .flatten()
        .into_iter()
        .map(|(key, value)| LocaleEntry {
            key,
            value,
            source_file: path.to_path_buf(),
        })
        .collect())
}

/// Discover and parse every locale file.
///
/// Files are parsed in parallel; the returned entries keep file order so
/// applying them in sequence gives last-file-wins semantics.
pub fn scan_locale_files(options: &ScanOptions) -> ScanResult {
    let (files, mut warnings) = discover_locale_files(options);

    let parsed: Vec<Result<Vec<LocaleEntry>, ScanWarning>> =
        files.par_iter().map(|path| parse_locale_file(path)).collect();

    let mut entries = Vec::new();
    for result in parsed {
        match result {
            Ok(file_entries) => entries.extend(file_entries),
            Err(warning) => {
                warn!("Skipping locale file {}: {}", warning.path, warning.error);
                warnings.push(warning);
            }
        }
    }

    ScanResult {
        files,
        entries,
        warnings,
    }
}
