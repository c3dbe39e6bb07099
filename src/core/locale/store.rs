use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use super::{
    KeyMatch, LocaleEntry,
    scan::{ScanOptions, ScanWarning, scan_locale_files},
};
use crate::core::ExtractError;

/// Load lifecycle of a [`LocaleStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Empty,
    Loading,
    Ready,
}

/// What one load found.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    pub files: usize,
    pub entries: usize,
    pub warnings: Vec<ScanWarning>,
}

/// In-memory index of every base-locale entry in the workspace.
///
/// Cloning is cheap; clones share the index and its load state. Lookups never
/// block on a load: they see whatever is indexed at that moment. Callers that
/// need a complete index await [`LocaleStore::wait_until_ready`] first.
#[derive(Clone)]
pub struct LocaleStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    options: ScanOptions,
    variants: Vec<String>,
    entries: RwLock<BTreeMap<String, LocaleEntry>>,
    state: watch::Sender<LoadState>,
}

impl LocaleStore {
    /// Create an empty store. `variants` is the locale search order used by
    /// suffix and reverse lookups.
    pub fn new(options: ScanOptions, variants: Vec<String>) -> Self {
        let (state, _) = watch::channel(LoadState::Empty);
        Self {
            inner: Arc::new(StoreInner {
                options,
                variants,
                entries: RwLock::new(BTreeMap::new()),
                state,
            }),
        }
    }

    /// Start a load in the background on the current runtime.
    pub fn spawn_load(&self) -> JoinHandle<Result<LoadSummary, ExtractError>> {
        let store = self.clone();
        tokio::spawn(async move { store.refresh().await })
    }

    /// Clear the index and repopulate it from disk.
    ///
    /// The state is `Loading` until every discovered file has been parsed and
    /// applied, then `Ready`, even if the scan task itself failed.
    pub async fn refresh(&self) -> Result<LoadSummary, ExtractError> {
        // Readers must never see `Ready` over a cleared index.
        self.inner.state.send_replace(LoadState::Loading);
        self.write_entries().clear();
        debug!("Locale store loading");

        let options = self.inner.options.clone();
        let scanned = tokio::task::spawn_blocking(move || scan_locale_files(&options)).await;

        let result = match scanned {
            Ok(scan) => {
                let mut entries = self.write_entries();
                for entry in scan.entries {
                    entries.insert(entry.key.clone(), entry);
                }
                let summary = LoadSummary {
                    files: scan.files.len(),
                    entries: entries.len(),
                    warnings: scan.warnings,
                };
                info!(
                    "Locale store ready: {} keys from {} files",
                    summary.entries, summary.files
                );
                Ok(summary)
            }
            Err(err) => {
                warn!("Locale scan task failed: {}", err);
                Err(ExtractError::ScanTask(err.to_string()))
            }
        };

        self.inner.state.send_replace(LoadState::Ready);
        result
    }

    /// Resolve once the current load has finished.
    pub async fn wait_until_ready(&self) {
        let mut rx = self.inner.state.subscribe();
        // The sender lives as long as `self`, so this cannot observe a close.
        let _ = rx.wait_for(|state| *state == LoadState::Ready).await;
    }

    pub fn state(&self) -> LoadState {
        *self.inner.state.borrow()
    }

    pub fn variants(&self) -> &[String] {
        &self.inner.variants
    }

    /// Point lookup by full key, including the locale segment.
    pub fn find_by_key(&self, full_key: &str) -> Option<LocaleEntry> {
        self.read_entries().get(full_key).cloned()
    }

    /// Look up `key` under each locale variant in order.
    ///
    /// A key that already carries a locale segment is also tried verbatim.
    pub fn find_by_suffix(&self, key: &str) -> Option<LocaleEntry> {
        let entries = self.read_entries();
        self.inner
            .variants
            .iter()
            .find_map(|variant| entries.get(&format!("{}.{}", variant, key)))
            .or_else(|| entries.get(key))
            .cloned()
    }

    /// Existing key whose value equals `text` exactly.
    ///
    /// Variants are searched in order; within a variant the lexicographically
    /// smallest key wins.
    pub fn key_for_text(&self, text: &str) -> Option<KeyMatch> {
        let entries = self.read_entries();
        for variant in &self.inner.variants {
            let prefix = format!("{}.", variant);
            let found = entries
                .range(prefix.clone()..)
                .take_while(|(key, _)| key.starts_with(&prefix))
                .find(|(_, entry)| entry.value == text);
            if let Some((key, entry)) = found {
                return Some(KeyMatch {
                    key: key[prefix.len()..].to_string(),
                    source_file: entry.source_file.clone(),
                });
            }
        }
        None
    }

    /// Add a freshly written entry without reloading.
    pub fn record(&self, full_key: &str, value: &str, source_file: &Path) {
        self.write_entries().insert(
            full_key.to_string(),
            LocaleEntry {
                key: full_key.to_string(),
                value: value.to_string(),
                source_file: source_file.to_path_buf(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Files that contributed at least one entry, sorted.
    pub fn source_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .read_entries()
            .values()
            .map(|entry| entry.source_file.clone())
            .collect();
        files.sort();
        files.dedup();
        files
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, BTreeMap<String, LocaleEntry>> {
        self.inner
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, BTreeMap<String, LocaleEntry>> {
        self.inner
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
