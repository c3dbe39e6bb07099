use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single extraction.
///
/// The first group are user-facing notices rather than faults: the caller
/// reports them in one line and nothing has been modified.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("extraction cancelled: no key was given")]
    UserCancelled,

    #[error("file type not supported for extraction: {0}")]
    UnsupportedFileType(String),

    #[error("no text selected")]
    NoActiveSelection,

    #[error("no active document")]
    NoActiveDocument,

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("'{0}' is not inside an application directory")]
    OutsideAppRoot(PathBuf),

    #[error("locale file '{path}' could not be parsed: {reason}")]
    UnparseableLocaleFile { path: PathBuf, reason: String },

    #[error("locale scan task failed: {0}")]
    ScanTask(String),

    #[error("failed to serialize locale data: {0}")]
    Serialize(#[from] serde_yml::Error),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for outcomes reported as a notice instead of an error.
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            ExtractError::UserCancelled
                | ExtractError::UnsupportedFileType(_)
                | ExtractError::NoActiveSelection
                | ExtractError::NoActiveDocument
                | ExtractError::InvalidSelection(_)
        )
    }
}
