use bookshelf_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog load, save, or validation failure
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Settings file could not be written
    #[error("Settings error: {0}")]
    Settings(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
