//! Error type shared by the parser, codec, and pipeline.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum GenError {
    /// Count expression or generator parameters are unusable.
    Parameter { reason: String },
    /// Opening, writing, renaming, or reading a file failed.
    Io { path: PathBuf, source: io::Error },
    /// A point file has the wrong size or does not match the cloud it came from.
    Format { reason: String },
}

impl GenError {
    pub(crate) fn parameter(reason: impl Into<String>) -> Self {
        Self::Parameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter { reason } => write!(f, "invalid parameter: {reason}"),
            Self::Io { path, source } => write!(f, "i/o error on {}: {source}", path.display()),
            Self::Format { reason } => write!(f, "malformed point file: {reason}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
