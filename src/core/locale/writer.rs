use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use tracing::{debug, warn};

use super::tree::{KeyAction, LocaleNode, LocaleTree};
use crate::core::ExtractError;

/// First line that starts a top-level mapping key, e.g. `es:` or `es-co:`.
static KEY_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[A-Za-z0-9_][\w-]*:").unwrap());

const DOCUMENT_START: &str = "---\n";

/// Read-modify-write access to one locale YAML file.
///
/// Whatever precedes the first top-level key (comments, front matter, the
/// `---` marker) is kept byte-for-byte; only the mapping below it is
/// rewritten.
pub struct LocaleWriter {
    file_path: PathBuf,
    header: String,
    root: LocaleNode,
}

impl LocaleWriter {
    /// Open an existing locale file or start an empty one.
    ///
    /// A missing or unreadable file is an empty document. A body that is not
    /// valid YAML is an error: rewriting it would drop its content.
    pub fn open_or_create(path: &Path) -> Result<Self, ExtractError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("Locale file {} does not exist yet", path.display());
                String::new()
            }
            Err(err) => {
                warn!(
                    "Failed to read locale file {}, starting empty: {}",
                    path.display(),
                    err
                );
                String::new()
            }
        };

        let (header, body) = split_header(&content);
        let root = match LocaleTree::parse(body) {
            Ok(LocaleTree::Node(node)) => node,
            Ok(_) => {
                warn!(
                    "Locale file {} is not a mapping, starting empty",
                    path.display()
                );
                LocaleNode::default()
            }
            Err(err) => {
                return Err(ExtractError::UnparseableLocaleFile {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            header,
            root,
        })
    }

    /// Set `full_key` (including the locale segment) to `value`.
    pub fn set(&mut self, full_key: &str, value: &str) -> KeyAction {
        let parts: Vec<&str> = full_key.split('.').collect();
        self.root.set_path(&parts, value)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn root(&self) -> &LocaleNode {
        &self.root
    }

    /// Render the whole document: header followed by the serialized mapping.
    pub fn render(&self) -> Result<String, ExtractError> {
        let body = self.root.to_yaml()?;
        let body = body.strip_prefix(DOCUMENT_START).unwrap_or(&body);
        Ok(format!("{}{}", self.header, body))
    }

    /// Write the document atomically, creating parent directories.
    pub fn save(&self) -> Result<(), ExtractError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExtractError::io(parent, e))?;
        }

        let content = self.render()?;
        let temp_path = temp_sibling(&self.file_path);
        fs::write(&temp_path, content).map_err(|e| ExtractError::io(&temp_path, e))?;
        if let Err(err) = fs::rename(&temp_path, &self.file_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(ExtractError::io(&self.file_path, err));
        }

        debug!("Wrote locale file {}", self.file_path.display());
        Ok(())
    }
}

/// Merge `<locale>.<key> = value` into the locale file at `path`.
pub fn merge_write(
    path: &Path,
    locale: &str,
    key: &str,
    value: &str,
) -> Result<KeyAction, ExtractError> {
    let mut writer = LocaleWriter::open_or_create(path)?;
    let action = writer.set(&format!("{}.{}", locale, key), value);
    writer.save()?;
    Ok(action)
}

/// Split `content` into the header and the structured body.
fn split_header(content: &str) -> (String, &str) {
    match KEY_START_REGEX.find(content) {
        Some(found) => {
            let header = &content[..found.start()];
            let header = if header.trim().is_empty() {
                DOCUMENT_START.to_string()
            } else if header.ends_with('\n') {
                header.to_string()
            } else {
                format!("{}\n", header)
            };
            (header, &content[found.start()..])
        }
        None => (DOCUMENT_START.to_string(), content),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
