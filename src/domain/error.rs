use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for cuevendor operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The vendor lock could not be created or acquired.
    #[error("Failed to acquire vendor lock at {}: {source}", path.display())]
    Lock { path: PathBuf, source: io::Error },

    /// The `cue.mod/` scaffolding could not be created.
    #[error("Failed to initialize cue.mod at {}: {source}", path.display())]
    Scaffold { path: PathBuf, source: io::Error },

    /// Reading a bundled file or writing it into the staging area failed.
    #[error("Failed to extract {}: {source}", path.display())]
    Extraction { path: PathBuf, source: io::Error },

    /// Moving a module directory into place failed.
    #[error("Failed to swap module '{module}' at {}: {source}", path.display())]
    Swap { module: String, path: PathBuf, source: io::Error },

    /// Unexpected internal failure (serialization and the like).
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Module name is not part of the bundle.
    #[error("Module '{name}' not found. Available: {available}")]
    ModuleNotFound { name: String, available: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(source)
            | AppError::Lock { source, .. }
            | AppError::Scaffold { source, .. }
            | AppError::Extraction { source, .. }
            | AppError::Swap { source, .. } => source.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::ModuleNotFound { .. } => io::ErrorKind::NotFound,
            AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }

    /// Whether the target package directory may have been mutated before this error.
    pub fn may_leave_partial_state(&self) -> bool {
        matches!(self, AppError::Swap { .. })
    }
}
