//! Error types for the saved-jobs service

use thiserror::Error;

/// Result type alias for saved-jobs operations
pub type Result<T> = std::result::Result<T, SavedJobsError>;

/// Errors that can occur in the saved-jobs service
#[derive(Debug, Error)]
pub enum SavedJobsError {
    /// No candidate identity could be resolved; the operation was refused
    /// before any network call.
    #[error("Please sign in to save jobs")]
    NotAuthenticated,

    /// The backend request failed; displays as the message extracted from
    /// the response body.
    #[error(transparent)]
    Client(#[from] rims_client::ClientError),

    /// The local session store could not be written
    #[error(transparent)]
    Session(#[from] rims_session::SessionError),
}
