//! Error types for playback management

use encore_core::CoreError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media player failed to prepare or play
    #[error("Player error: {0}")]
    Player(String),

    /// A collaborator call failed
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CoreError),

    /// The controller was created outside a Tokio runtime
    #[error("No Tokio runtime available")]
    NoRuntime,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
