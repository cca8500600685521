use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code used by shells when a command cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code used by shells when a command exists but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Library-wide error type for entrykit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file unreadable or malformed.
    #[error("{0}")]
    Configuration(String),

    /// A boot step ran and exited unsuccessfully.
    #[error("Step '{step}' failed with exit code {code}")]
    StepFailed { step: String, code: i32 },

    /// A boot step could not be started at all.
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Gateway template could not be read.
    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendered configuration could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Scaffold target already holds the file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Unexpected internal failure (e.g. output serialization).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code to report for this error.
    ///
    /// Step failures propagate the child's own code so the container
    /// runtime sees exactly what the failing tool returned.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::StepFailed { code, .. } => *code,
            AppError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => 1,
            },
            _ => 1,
        }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Spawn { source, .. }
            | AppError::TemplateRead { source, .. }
            | AppError::ConfigWrite { source, .. } => source.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            AppError::StepFailed { .. } | AppError::Internal(_) => io::ErrorKind::Other,
        }
    }
}
