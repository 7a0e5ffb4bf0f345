//! Error types for the store and its persistence backends.

use thiserror::Error;

/// Synchronous collection errors, returned straight to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("page '{id}' already exists")]
    DuplicateId { id: String },

    #[error("page '{id}' not found")]
    NotFound { id: String },
}

/// Remote persistence failures. These never surface as return values of
/// the mutation API; the synchronizer folds them into its `Rejected`
/// phase, and re-issuing the same call is always safe.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote returned status {status}")]
    Status { status: u16 },
}

/// Failures of the synchronous local-file deployment mode.
#[derive(Error, Debug)]
pub enum LocalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to persist collection: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode collection: {0}")]
    Json(#[from] serde_json::Error),
}
