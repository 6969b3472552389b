//! Error types for directory reporting

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the filesystem or writing records.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Permission denied for a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The entry disappeared between listing and inspection.
    #[error("path not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The report root exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Any other filesystem failure.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a record to the output failed.
    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl WalkError {
    /// Create a filesystem error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path this error occurred at, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => Some(path),
            Self::Output(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;
