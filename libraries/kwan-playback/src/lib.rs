//! Kwan Player - Playback Management
//!
//! Platform-agnostic core of the Kwan music player widget.
//!
//! This crate provides:
//! - Track sequencing (next/previous with wrap-around, shuffle cycles, repeat)
//! - Playlist loading from JSON
//! - Persisted player state (one JSON snapshot under one storage key)
//! - Volume control (0-100%, mute/unmute)
//! - A player controller wiring UI and media callbacks together
//! - Browser bindings (feature `wasm`)
//!
//! # Architecture
//!
//! The [`TrackSequencer`] is a plain state machine that knows only the
//! playlist length. The [`MusicPlayer`] owns one, together with a
//! [`MediaTransport`] (what actually plays audio) and a [`ConfigStore`]
//! (where state is persisted). Both are traits so the same player drives an
//! `<audio>` element in the browser and a simulated transport in tests.
//!
//! # Example: Sequencing
//!
//! ```rust
//! use kwan_playback::TrackSequencer;
//!
//! let mut sequencer = TrackSequencer::new(3).unwrap();
//! assert_eq!(sequencer.advance(), 1);
//! assert_eq!(sequencer.advance(), 2);
//! assert_eq!(sequencer.advance(), 0);
//! assert_eq!(sequencer.retreat(), 2);
//!
//! sequencer.set_repeat_mode(true);
//! assert_eq!(sequencer.on_track_ended(), 2);
//! ```
//!
//! # Example: Shuffle Cycle
//!
//! ```rust
//! use kwan_playback::TrackSequencer;
//!
//! let mut sequencer = TrackSequencer::with_seed(4, 42).unwrap();
//! sequencer.set_shuffle_mode(true);
//!
//! let mut seen = std::collections::HashSet::new();
//! for _ in 0..4 {
//!     seen.insert(sequencer.on_track_ended());
//! }
//! // Every track played once before any repeats
//! assert_eq!(seen.len(), 4);
//! ```
//!
//! # Example: Player Integration
//!
//! ```rust,no_run
//! use kwan_playback::{MediaTransport, MemoryStore, MusicPlayer, PlayerConfig, Playlist, Result};
//! use std::time::Duration;
//!
//! // Implement MediaTransport for your platform
//! struct MyAudio;
//!
//! impl MediaTransport for MyAudio {
//!     fn load(&mut self, path: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, position: Duration) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, gain: f64) -> Result<()> { Ok(()) }
//!     fn duration(&self) -> Option<Duration> { None }
//!     fn position(&self) -> Duration { Duration::ZERO }
//! }
//!
//! let playlist = Playlist::from_json(r#"[
//!     {"name": "Song", "singer": "Artist", "image": "cover.jpg", "path": "song.mp3"}
//! ]"#)?;
//! let mut player = MusicPlayer::new(playlist, PlayerConfig::default(), MyAudio, MemoryStore::new())?;
//!
//! player.toggle_play()?;
//! player.on_play(); // from the transport's "play" notification
//! for event in player.drain_events() {
//!     // update the UI
//! }
//! # Ok::<(), kwan_playback::PlaybackError>(())
//! ```

mod error;
pub mod events;
mod player;
mod playlist;
mod sequencer;
mod snapshot;
pub mod store;
mod transport;
pub mod types;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use player::MusicPlayer;
pub use playlist::Playlist;
pub use sequencer::TrackSequencer;
pub use snapshot::SequencerSnapshot;
pub use store::{ConfigStore, FileStore, MemoryStore};
pub use transport::MediaTransport;
pub use types::{PlaybackState, PlayerConfig, Track, DEFAULT_STORAGE_KEY};
pub use volume::Volume;
