use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading, saving, or validating books.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The library file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Any other file-system failure (permissions, full disk, missing parent)
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The library file exists but is not a JSON array of books
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Serializing the book list failed
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A record failed boundary validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CatalogError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn file_not_found(path: &Path) -> Self {
        Self::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// True when the error only means "nothing saved here yet".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
