//! Error types shared by the scanner, renderer, session and clipboard

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// A subdirectory could not be read during a scan. Never returned as
    /// `Err` from a scan; carried as data in the scan report instead.
    #[error("skipped unreadable folder '{}': {reason}", path.display())]
    ScanPartialFailure { path: PathBuf, reason: String },

    #[error("cannot access '{}': {source}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("nothing to copy, generate the tree first")]
    NothingToCopy,

    #[error("unknown folder '{0}'")]
    UnknownFolder(String),
}

pub type MapResult<T> = Result<T, MapError>;
