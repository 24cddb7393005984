//! Player events
//!
//! Event-based communication for UI synchronization. The player queues an
//! event whenever something the renderer shows has changed:
//! - Play/pause state (play button, artwork rotation)
//! - Current track (active playlist entry, now-playing fields)
//! - Shuffle/repeat flags (button highlight)
//! - Progress (progress bar)
//! - Volume

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// Media started or stopped playing
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Current track changed (also emitted when a repeated track restarts)
    #[serde(rename_all = "camelCase")]
    TrackChanged {
        /// Playlist index of the new current track
        index: usize,
        /// Index of the track that was current before, if any
        previous_index: Option<usize>,
    },

    /// Shuffle or repeat flag changed
    #[serde(rename_all = "camelCase")]
    ModeChanged {
        shuffle_mode: bool,
        repeat_mode: bool,
    },

    /// Playback progress, 0-100
    ProgressChanged { percent: f64 },

    /// Volume changed
    #[serde(rename_all = "camelCase")]
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },
}
