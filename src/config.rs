use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lexirc.json";

static LOCALE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}([-_][A-Za-z0-9]{2,8})*$").unwrap());

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    /// Locale search order for lookups. The base locale is searched first
    /// even when missing from this list.
    #[serde(default = "default_locale_variants")]
    pub locale_variants: Vec<String>,
    #[serde(default = "default_pack_marker")]
    pub pack_marker: String,
    #[serde(default = "default_app_marker")]
    pub app_marker: String,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    /// Directories, relative to the project root, scanned for locale directories.
    #[serde(default = "default_locale_roots")]
    pub locale_roots: Vec<String>,
    /// YAML files consulted first when looking for an existing key.
    #[serde(default)]
    pub base_yml_files: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_base_locale() -> String {
    "es".to_string()
}

fn default_locale_variants() -> Vec<String> {
    ["es", "es-co", "es-pe", "es-mx", "es-br"]
        .map(String::from)
        .to_vec()
}

fn default_pack_marker() -> String {
    "packs".to_string()
}

fn default_app_marker() -> String {
    "app".to_string()
}

fn default_locales_dir() -> String {
    "config/locales".to_string()
}

fn default_locale_roots() -> Vec<String> {
    vec![".".to_string()]
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/.git/**", "**/tmp/**"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_locale: default_base_locale(),
            locale_variants: default_locale_variants(),
            pack_marker: default_pack_marker(),
            app_marker: default_app_marker(),
            locales_dir: default_locales_dir(),
            locale_roots: default_locale_roots(),
            base_yml_files: Vec::new(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an invalid locale code, an empty marker or
    /// locales directory, or an invalid glob pattern in `ignores`.
    pub fn validate(&self) -> Result<()> {
        validate_locale_code(&self.base_locale).context("Invalid 'baseLocale'")?;
        for variant in &self.locale_variants {
            validate_locale_code(variant).context("Invalid entry in 'localeVariants'")?;
        }

        if self.app_marker.trim().is_empty() {
            bail!("'appMarker' must not be empty");
        }
        if self.pack_marker.trim().is_empty() {
            bail!("'packMarker' must not be empty");
        }
        if self.locales_dir.trim().is_empty() {
            bail!("'localesDir' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Locale variants in search order, base locale first.
    pub fn variants(&self) -> Vec<String> {
        let mut variants = Vec::with_capacity(self.locale_variants.len() + 1);
        variants.push(self.base_locale.clone());
        for variant in &self.locale_variants {
            if !variants.contains(variant) {
                variants.push(variant.clone());
            }
        }
        variants
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }

    /// Add a base YAML file. Returns false if it was already listed.
    pub fn add_base_file(&mut self, path: &str) -> bool {
        if self.base_yml_files.iter().any(|existing| existing == path) {
            return false;
        }
        self.base_yml_files.push(path.to_string());
        true
    }

    /// Remove a base YAML file. Returns false if it was not listed.
    pub fn remove_base_file(&mut self, path: &str) -> bool {
        let before = self.base_yml_files.len();
        self.base_yml_files.retain(|existing| existing != path);
        self.base_yml_files.len() != before
    }
}

pub fn validate_locale_code(code: &str) -> Result<()> {
    if !LOCALE_CODE_REGEX.is_match(code) {
        bail!("\"{}\" is not a locale code (expected e.g. \"es\" or \"es-co\")", code);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// Write `config` to `path` as pretty JSON with a trailing newline.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}
