//! Store error type.

use thiserror::Error;

/// Errors surfaced by a [`DocumentStore`](crate::DocumentStore).
///
/// Services map any of these to an HTTP 500 with an `{"error": description}`
/// payload, except where an endpoint's contract says otherwise.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("instance not found: {0}")]
    NotFound(String),

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// The human-readable description used in error payloads.
    pub fn description(&self) -> String {
        self.to_string()
    }
}
