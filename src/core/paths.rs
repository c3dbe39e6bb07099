//! Key namespaces and locale file locations derived from a source file path.
//!
//! Follows the Rails layout: `app/models/user.rb` gets keys under
//! `models.user` and its strings live in
//! `config/locales/models/user/<locale>.yml`. Files inside a pack
//! (`packs/<name>/app/...`, possibly nested as `packs/team/<name>/app/...`)
//! use the pack's own `config/locales` directory.

use std::path::{Component, Path, PathBuf};

use super::ExtractError;

/// Conventions used to map source files to keys and locale files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleLayout {
    pub workspace_root: PathBuf,
    /// Directory name marking the application root, e.g. `app`.
    pub app_marker: String,
    /// Directory name containing packages, e.g. `packs`.
    pub pack_marker: String,
    /// Locale directory relative to an application or pack root.
    pub locales_dir: PathBuf,
    pub base_locale: String,
}

impl LocaleLayout {
    /// Dotted namespace for `file`: the path below the app marker, without extension.
    pub fn namespace(&self, file: &Path) -> Result<String, ExtractError> {
        let parts = self.relative_parts(file)?;
        let (file_name, dirs) = parts
            .split_last()
            .ok_or_else(|| ExtractError::OutsideAppRoot(file.to_path_buf()))?;

        let stem = match file_name.rfind('.') {
            Some(index) if index > 0 => &file_name[..index],
            _ => file_name.as_str(),
        };

        let mut segments: Vec<&str> = dirs.iter().map(String::as_str).collect();
        segments.push(stem);
        Ok(segments.join("."))
    }

    /// Full key for a string extracted from `file` under `suffix`.
    ///
    /// ```
    /// use std::path::{Path, PathBuf};
    /// use lexi::core::paths::LocaleLayout;
    ///
    /// let layout = LocaleLayout {
    ///     workspace_root: PathBuf::from("/work/shop"),
    ///     app_marker: "app".into(),
    ///     pack_marker: "packs".into(),
    ///     locales_dir: PathBuf::from("config/locales"),
    ///     base_locale: "es".into(),
    /// };
    /// let key = layout.build_key(Path::new("/work/shop/app/models/user.rb"), "greeting").unwrap();
    /// assert_eq!(key, "models.user.greeting");
    /// ```
    pub fn build_key(&self, file: &Path, suffix: &str) -> Result<String, ExtractError> {
        Ok(format!("{}.{}", self.namespace(file)?, suffix))
    }

    /// Locale file that receives strings extracted from `file`.
    pub fn locale_file(&self, file: &Path) -> Result<PathBuf, ExtractError> {
        let base = match self.pack_root(file) {
            Some(pack_root) => self.workspace_root.join(pack_root).join(&self.locales_dir),
            None => self.workspace_root.join(&self.locales_dir),
        };

        let parts = self.relative_parts(file)?;
        let (file_name, dirs) = parts
            .split_last()
            .ok_or_else(|| ExtractError::OutsideAppRoot(file.to_path_buf()))?;
        // `show.html.erb` -> `show`
        let stem = file_name.split('.').next().unwrap_or(file_name);

        let mut path = base;
        for dir in dirs {
            path.push(dir);
        }
        path.push(stem);
        path.push(format!("{}.yml", self.base_locale));
        Ok(path)
    }

    /// True if `file` lives inside a pack.
    pub fn is_pack(&self, file: &Path) -> bool {
        self.pack_root(file).is_some()
    }

    /// Path components below the app marker.
    fn relative_parts(&self, file: &Path) -> Result<Vec<String>, ExtractError> {
        let scoped = file.strip_prefix(&self.workspace_root).unwrap_or(file);
        let parts = path_parts(scoped);

        let app_index = parts
            .iter()
            .position(|part| part == &self.app_marker)
            .ok_or_else(|| ExtractError::OutsideAppRoot(file.to_path_buf()))?;

        let rest = parts[app_index + 1..].to_vec();
        if rest.is_empty() {
            return Err(ExtractError::OutsideAppRoot(file.to_path_buf()));
        }
        Ok(rest)
    }

    /// Pack directory for a file inside a pack: everything from the pack
    /// marker up to the app marker, e.g. `packs/team/billing`. Relative to the
    /// workspace root when the file is below it.
    fn pack_root(&self, file: &Path) -> Option<PathBuf> {
        let scoped = file.strip_prefix(&self.workspace_root).unwrap_or(file);
        let components = path_parts(scoped);
        let marker = components.iter().position(|part| part == &self.pack_marker)?;
        let app = marker
            + 1
            + components[marker + 1..]
                .iter()
                .position(|part| part == &self.app_marker)?;
        // At least one pack name segment between the two markers.
        if app == marker + 1 {
            return None;
        }

        Some(components[..app].iter().collect())
    }
}

/// Normal path components as strings, keeping a leading root if present.
fn path_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            Component::RootDir => Some(std::path::MAIN_SEPARATOR.to_string()),
            Component::Prefix(prefix) => Some(prefix.as_os_str().to_string_lossy().to_string()),
            Component::CurDir | Component::ParentDir => None,
        })
        .collect()
}
