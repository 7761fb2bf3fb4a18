//! Error types for library retrieval.

use crate::snapshot::SnapshotError;

/// Errors produced while retrieving the game library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("invalid or unauthorized Steam Web API key")]
    Unauthorized,

    #[error("Steam API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}
