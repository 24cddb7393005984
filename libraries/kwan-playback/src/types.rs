//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Default key the player state is stored under
pub const DEFAULT_STORAGE_KEY: &str = "KWAN_PLAYER";

/// One playable item of the playlist
///
/// A track is identified by its position in the playlist; it carries no id
/// of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name
    pub name: String,

    /// Artist / singer label
    pub singer: String,

    /// Artwork reference (URL or path)
    pub image: String,

    /// Playable media reference (URL or path)
    pub path: String,
}

impl Track {
    pub fn new(
        name: impl Into<String>,
        singer: impl Into<String>,
        image: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            singer: singer.into(),
            image: image.into(),
            path: path.into(),
        }
    }
}

/// Playback state as reported by the media transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Track loaded but not playing
    Paused,

    /// Currently playing
    Playing,
}

/// Configuration for the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Key the snapshot is persisted under (default: `KWAN_PLAYER`)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Initial volume when nothing is stored (0-100, default: 100)
    #[serde(default = "default_volume")]
    pub volume: u8,

    /// Seed the player from the stored snapshot (default: true)
    #[serde(default = "default_restore_state")]
    pub restore_state: bool,

    /// Fixed seed for the shuffle RNG; entropy-seeded when unset
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            volume: default_volume(),
            restore_state: default_restore_state(),
            shuffle_seed: None,
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_volume() -> u8 {
    100
}

fn default_restore_state() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.storage_key, "KWAN_PLAYER");
        assert_eq!(config.volume, 100);
        assert!(config.restore_state);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: PlayerConfig = serde_json::from_str(r#"{"volume": 40}"#).unwrap();
        assert_eq!(config.volume, 40);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.restore_state);
    }

    #[test]
    fn track_serializes_four_plain_keys() {
        let track: Track = serde_json::from_str(
            r#"{"name": "Song", "singer": "Someone", "image": "a.jpg", "path": "a.mp3"}"#,
        )
        .unwrap();
        assert_eq!(track, Track::new("Song", "Someone", "a.jpg", "a.mp3"));
    }

    #[test]
    fn playback_state_serializes_lowercase() {
        let json = serde_json::to_string(&PlaybackState::Playing).unwrap();
        assert_eq!(json, r#""playing""#);
    }
}
