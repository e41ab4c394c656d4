use thiserror::Error;

use karuta_import::ImportError;
use karuta_lookup::LookupError;
use karuta_store::StoreError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("Image lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// No card in the collection has the requested code
    #[error("No card with code '{0}'")]
    UnknownCard(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn unknown_card(code: impl Into<String>) -> Self {
        Self::UnknownCard(code.into())
    }
}
