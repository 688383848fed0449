//! Error types for session storage

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when persisting session state.
///
/// Reads never produce these: corrupt or missing data is treated as absence.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write session file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode session data: {0}")]
    Encode(#[from] serde_json::Error),
}
