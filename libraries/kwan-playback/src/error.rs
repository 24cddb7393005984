//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Playlist has no tracks
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Track index outside the playlist
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Seek percentage outside 0-100
    #[error("Invalid seek percentage: {0}")]
    InvalidSeekPercent(f64),

    /// Snapshot or playlist (de)serialization failed
    #[error("Serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Config store failure
    #[error("Config store error: {0}")]
    Store(String),

    /// Media transport failure
    #[error("Media transport error: {0}")]
    Transport(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
