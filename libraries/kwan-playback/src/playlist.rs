//! Playlist: the ordered, session-immutable list of tracks

use crate::error::{PlaybackError, Result};
use crate::types::Track;
use std::ops::Index;

/// Ordered list of tracks, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create a playlist from tracks
    ///
    /// Fails with [`PlaybackError::EmptyPlaylist`] when `tracks` is empty.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    /// Parse a playlist from a JSON array of tracks
    pub fn from_json(json: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(json)?;
        Self::new(tracks)
    }

    /// Number of tracks (always >= 1)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl Index<usize> for Playlist {
    type Output = Track;

    fn index(&self, index: usize) -> &Track {
        &self.tracks[index]
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_playlist_rejected() {
        assert!(matches!(
            Playlist::new(vec![]),
            Err(PlaybackError::EmptyPlaylist)
        ));
    }

    #[test]
    fn from_json_array() {
        let playlist = Playlist::from_json(
            r#"[
                {"name": "One", "singer": "A", "image": "1.jpg", "path": "1.mp3"},
                {"name": "Two", "singer": "B", "image": "2.jpg", "path": "2.mp3"}
            ]"#,
        )
        .unwrap();

        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist[1].name, "Two");
        assert_eq!(playlist.get(2), None);
    }

    #[test]
    fn from_json_empty_array() {
        assert!(matches!(
            Playlist::from_json("[]"),
            Err(PlaybackError::EmptyPlaylist)
        ));
    }

    #[test]
    fn from_json_malformed() {
        assert!(matches!(
            Playlist::from_json("{not json"),
            Err(PlaybackError::Snapshot(_))
        ));
    }
}
