//! MDU-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, MduError>;

/// Top-level error type for mdu.
///
/// Filesystem errors carry the offending path so worker threads can log a
/// self-contained diagnostic line without extra context.
#[derive(Debug, Error)]
pub enum MduError {
    #[error("[MDU-1001] invalid usage: {details}")]
    InvalidUsage { details: String },

    #[error("[MDU-2001] unable to stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[MDU-2002] cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[MDU-2003] error reading entry of '{path}': {source}")]
    DirEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[MDU-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[MDU-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl MduError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidUsage { .. } => "MDU-1001",
            Self::Stat { .. } => "MDU-2001",
            Self::ReadDir { .. } => "MDU-2002",
            Self::DirEntry { .. } => "MDU-2003",
            Self::Io { .. } => "MDU-3001",
            Self::Runtime { .. } => "MDU-3900",
        }
    }

    /// Whether the error leaves the run degraded (undercounted totals)
    /// rather than aborted. Everything filesystem-shaped is non-fatal.
    #[must_use]
    pub const fn is_degradation(&self) -> bool {
        matches!(
            self,
            Self::Stat { .. } | Self::ReadDir { .. } | Self::DirEntry { .. }
        )
    }

    /// Convenience constructor for stat failures with a known path.
    #[must_use]
    pub fn stat(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for directory-open failures.
    #[must_use]
    pub fn read_dir(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
