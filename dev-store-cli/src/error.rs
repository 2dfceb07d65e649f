use thiserror::Error;

use dev_store_lib::{CatalogError, ImportError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Remote catalog failure, shown with the user-facing message first
    #[error("{} ({})", .0.user_message(), .0)]
    Catalog(#[from] CatalogError),

    /// Rejected import document
    #[error("{} ({})", .0.user_message(), .0)]
    Import(#[from] ImportError),

    /// Export serialization failed
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// No saved developer with this id
    #[error("No saved developer with id {0}")]
    UnknownDeveloper(u64),

    /// The developer has no app with this track id
    #[error("Developer {developer} has no app with id {track}")]
    UnknownApp { developer: u64, track: u64 },

    /// A numbered choice outside the listed range
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn invalid_choice(msg: impl Into<String>) -> Self {
        Self::InvalidChoice(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
