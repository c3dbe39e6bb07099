use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTextParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Ruby or ERB file, absolute or relative to the project root
    pub file_path: String,
    /// Exact text to extract, as it appears in the file
    pub text: Option<String>,
    /// Which occurrence of `text` to extract (1-based, default 1)
    pub occurrence: Option<u32>,
    /// Start of the selection in characters, used when `text` is absent
    pub start: Option<u32>,
    /// End of the selection in characters (exclusive)
    pub end: Option<u32>,
    /// Key suffix for a new entry; derived from the text when absent
    pub key: Option<String>,
    /// Write the locale file and the source file (default false)
    pub apply: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupKeyParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Key with or without the locale segment
    pub key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindKeyForTextParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Exact locale value, with `%{name}` placeholders
    pub text: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFileKeysParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Source file, absolute or relative to the project root
    pub file_path: String,
}

// ============================================================
// Results
// ============================================================

/// Result of get_config
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: Config,
    /// Locale search order, base locale first
    pub variants: Vec<String>,
}

/// Result of extract_text
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractTextResult {
    pub key: String,
    /// An existing key already held the same value
    pub reused: bool,
    pub value: String,
    pub locale_file: String,
    /// `I18n.t` call that replaced the selection
    pub replacement: String,
    pub placeholders: Vec<PlaceholderItem>,
    /// False for a dry run
    pub applied: bool,
    /// `added` or `updated`, present when the locale file was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub slug: String,
    pub expression: String,
}

/// Result of lookup_key and find_key_for_text
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyLookupResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_file: Option<String>,
    /// 1-based line of the key in `locale_file`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl KeyLookupResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            key: None,
            value: None,
            locale_file: None,
            line: None,
        }
    }
}

/// Result of list_file_keys
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileKeysResult {
    pub file_path: String,
    pub total_count: usize,
    pub missing_count: usize,
    pub keys: Vec<FileKeyItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileKeyItem {
    pub key: String,
    pub line: usize,
    pub col: usize,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_line: Option<usize>,
}
