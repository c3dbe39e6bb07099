use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    config::{Config, load_config, validate_locale_code},
    core::{
        locale::{BaseFileIndex, KeyMatch, LocaleStore, ScanOptions, find_key_line},
        paths::LocaleLayout,
        processor::ExtractContext,
    },
};

/// A project root with its configuration and locale data.
///
/// The store starts empty; call [`LocaleStore::spawn_load`] or
/// [`LocaleStore::refresh`] before relying on lookups.
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub layout: LocaleLayout,
    pub store: LocaleStore,
    pub base_files: BaseFileIndex,
}

impl Workspace {
    /// Load the workspace rooted at `root`, optionally overriding the base locale.
    pub fn load(root: &Path, base_locale: Option<&str>) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Invalid project root: {}", root.display()))?;
        let loaded = load_config(&root)?;
        let mut config = loaded.config;

        if let Some(locale) = base_locale {
            validate_locale_code(locale).context("Invalid --base-locale")?;
            config.base_locale = locale.to_string();
        }

        match &loaded.path {
            Some(path) => debug!("Using config {}", path.display()),
            None => debug!("No config file found, using defaults"),
        }

        Self::from_config(root, config, loaded.path)
    }

    pub fn from_config(root: PathBuf, config: Config, config_path: Option<PathBuf>) -> Result<Self> {
        let layout = LocaleLayout {
            workspace_root: root.clone(),
            app_marker: config.app_marker.clone(),
            pack_marker: config.pack_marker.clone(),
            locales_dir: PathBuf::from(&config.locales_dir),
            base_locale: config.base_locale.clone(),
        };

        let base_file_paths = resolve_all(&root, &config.base_yml_files);
        let options = ScanOptions {
            roots: resolve_all(&root, &config.locale_roots),
            files: base_file_paths.clone(),
            locales_dir: PathBuf::from(&config.locales_dir),
            file_pattern: ScanOptions::base_locale_pattern(&config.base_locale),
            ignores: config.ignore_patterns()?,
        };
        let store = LocaleStore::new(options, config.variants());
        let base_files = BaseFileIndex::load(&base_file_paths);

        Ok(Self {
            root,
            config,
            config_path,
            layout,
            store,
            base_files,
        })
    }

    pub fn context(&self) -> ExtractContext<'_> {
        ExtractContext {
            layout: &self.layout,
            store: &self.store,
            base_files: &self.base_files,
        }
    }

    /// Existing key holding exactly `text`, base files first.
    pub fn key_for_text(&self, text: &str) -> Option<KeyMatch> {
        self.base_files
            .key_for_text(text)
            .or_else(|| self.store.key_for_text(text))
    }

    /// Line defining `key` in `file`. A key without its locale segment is
    /// tried under each locale variant.
    pub fn definition_line(&self, file: &Path, key: &str) -> Option<usize> {
        let content = fs::read_to_string(file).ok()?;
        find_key_line(&content, key).or_else(|| {
            self.store
                .variants()
                .iter()
                .find_map(|variant| find_key_line(&content, &format!("{}.{}", variant, key)))
        })
    }

    /// Absolute path of a file given relative to the current directory or the root.
    pub fn resolve_file(&self, file: &Path) -> Result<PathBuf> {
        let candidate = if file.is_absolute() || file.exists() {
            file.to_path_buf()
        } else {
            self.root.join(file)
        };
        candidate
            .canonicalize()
            .with_context(|| format!("File not found: {}", file.display()))
    }
}

fn resolve_all(root: &Path, paths: &[String]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|path| match path.as_str() {
            "" | "." | "./" => root.to_path_buf(),
            path => root.join(path),
        })
        .collect()
}
