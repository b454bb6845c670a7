//! Error types for menagerie-dump.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while dumping the store.
#[derive(Debug, Error)]
pub enum DumpError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`DumpError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DumpError {
    DumpError::Io {
        path: path.into(),
        source,
    }
}
