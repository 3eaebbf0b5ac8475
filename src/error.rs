use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for textindex operations
///
/// The index itself never fails; these errors come from reading sources and
/// validating configuration.
#[derive(Error, Debug)]
pub enum TextIndexError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Source not found: {0:?}")]
    SourceNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type alias for textindex operations
pub type Result<T> = std::result::Result<T, TextIndexError>;

impl TextIndexError {
    /// Check if this error indicates a transient failure that could be retried
    pub fn is_retriable(&self) -> bool {
        match self {
            TextIndexError::Read { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}
