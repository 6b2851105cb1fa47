//! Error types for listing operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    // Usage
    #[error("Invalid parameter:{0}")]
    InvalidParameter(char),

    #[error("{0}")]
    Usage(String),

    // Filesystem
    #[error("cannot open directory '{}': {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot {op} '{}': {source}", .path.display())]
    Metadata {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Rendering
    #[error("unknown file type for '{}'", .path.display())]
    UnknownType { path: PathBuf },

    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
}

impl ListError {
    /// Whether the error came from the command line rather than the filesystem.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidParameter(_) | Self::Usage(_))
    }

    pub(crate) fn lstat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Metadata {
            op: "lstat",
            path: path.into(),
            source,
        }
    }
}

impl From<io::Error> for ListError {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
