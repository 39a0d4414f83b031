//! Error types for filesystem and launcher operations.
//!
//! Every operation in [crate::core::fm] returns a [FsError]. The session never lets one of
//! these escape: it renders them into a one-line status message instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("source and destination are the same")]
    SameFile,

    #[error("{} is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    #[error("'{0}' already exists")]
    AlreadyExists(String),

    #[error("cannot move across filesystems (no copy fallback): {0}")]
    CrossDevice(io::Error),

    #[error("source no longer exists: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("{cmd} not found")]
    LauncherNotFound { cmd: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type FsResult<T> = Result<T, FsError>;
