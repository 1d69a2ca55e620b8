//! Error types for the audit pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort an audit run.
///
/// Per-file problems during the walk are not represented here — the scanner
/// logs and skips them so concurrent activity on the mount cannot sink the
/// whole audit.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Scan root is missing or not a directory. Fatal precondition.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest row could not be serialized or written.
    #[error("failed to write manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl AuditError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a manifest-writing error with path context.
    pub fn manifest(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Manifest {
            path: path.into(),
            source,
        }
    }
}
