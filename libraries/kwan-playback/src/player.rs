//! Player - wires the sequencer to a media transport and a config store
//!
//! The player is what UI callbacks talk to. Button clicks map to
//! [`MusicPlayer::toggle_play`], [`MusicPlayer::next`], [`MusicPlayer::previous`],
//! [`MusicPlayer::select`] and the mode toggles; media notifications map to
//! [`MusicPlayer::on_play`], [`MusicPlayer::on_pause`], [`MusicPlayer::on_ended`]
//! and [`MusicPlayer::on_time_update`].
//!
//! Every operation that changes the sequencer or the volume writes one
//! snapshot back to the store and queues the matching [`PlayerEvent`].

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    playlist::Playlist,
    sequencer::TrackSequencer,
    snapshot::SequencerSnapshot,
    store::ConfigStore,
    transport::MediaTransport,
    types::{PlaybackState, PlayerConfig, Track},
    volume::Volume,
};
use tracing::{debug, info, warn};

/// Music player controller
pub struct MusicPlayer<T, S> {
    playlist: Playlist,
    sequencer: TrackSequencer,
    transport: T,
    store: S,
    storage_key: String,
    volume: Volume,
    state: PlaybackState,

    /// Last reported progress, 0-100
    progress: f64,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<T: MediaTransport, S: ConfigStore> MusicPlayer<T, S> {
    /// Create a player and load the current track into the transport
    ///
    /// When `config.restore_state` is set, the sequencer and volume are seeded
    /// from the snapshot stored under `config.storage_key`. An unreadable
    /// snapshot is logged and ignored.
    pub fn new(playlist: Playlist, config: PlayerConfig, transport: T, store: S) -> Result<Self> {
        let sequencer = match config.shuffle_seed {
            Some(seed) => TrackSequencer::with_seed(playlist.len(), seed)?,
            None => TrackSequencer::new(playlist.len())?,
        };

        let mut player = Self {
            playlist,
            sequencer,
            transport,
            store,
            storage_key: config.storage_key,
            volume: Volume::new(config.volume),
            state: PlaybackState::Paused,
            progress: 0.0,
            pending_events: Vec::new(),
        };

        if config.restore_state {
            if let Some(snapshot) = player.load_snapshot() {
                player.sequencer.restore(&snapshot);
                if let Some(level) = snapshot.volume {
                    player.volume.set_level(level);
                }
                if snapshot.muted {
                    player.volume.mute();
                }
            }
        }

        info!(
            tracks = player.playlist.len(),
            index = player.sequencer.current_index(),
            shuffle = player.sequencer.shuffle_mode(),
            repeat = player.sequencer.repeat_mode(),
            "Player started"
        );

        player.transport.set_volume(player.volume.gain())?;
        let index = player.sequencer.current_index();
        player.transport.load(&player.playlist[index].path)?;

        player.pending_events.push(PlayerEvent::TrackChanged {
            index,
            previous_index: None,
        });
        player.emit_mode_changed();
        player.emit_volume_changed();

        Ok(player)
    }

    fn load_snapshot(&self) -> Option<SequencerSnapshot> {
        let stored = match self.store.load(&self.storage_key) {
            Ok(Some(stored)) => stored,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Failed to read stored player state");
                return None;
            }
        };

        match SequencerSnapshot::from_json(&stored) {
            Ok(snapshot) => {
                info!(key = %self.storage_key, "Restored player state");
                Some(snapshot)
            }
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Ignoring unreadable player state");
                None
            }
        }
    }

    // ===== Transport Controls =====

    /// Play/pause button
    ///
    /// Only asks the transport; the state flips when the transport reports
    /// back through [`Self::on_play`] / [`Self::on_pause`].
    pub fn toggle_play(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => self.transport.pause(),
            PlaybackState::Paused => self.transport.play(),
        }
    }

    /// Next button: shuffle pick in shuffle mode, otherwise the following track
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let previous = self.sequencer.current_index();
        if self.sequencer.shuffle_mode() {
            self.sequencer.shuffle_pick();
        } else {
            self.sequencer.advance();
        }
        self.start_current(Some(previous))
    }

    /// Previous button: shuffle pick in shuffle mode, otherwise the preceding track
    pub fn previous(&mut self) -> Result<()> {
        let previous = self.sequencer.current_index();
        if self.sequencer.shuffle_mode() {
            self.sequencer.shuffle_pick();
        } else {
            self.sequencer.retreat();
        }
        self.start_current(Some(previous))
    }

    /// Playlist entry clicked
    ///
    /// Clicking the entry that is already active does nothing.
    pub fn select(&mut self, index: usize) -> Result<()> {
        let previous = self.sequencer.current_index();
        if index == previous {
            debug!(index, "Selected track is already active");
            return Ok(());
        }
        self.sequencer.jump_to(index)?;
        self.start_current(Some(previous))
    }

    /// Seek by progress-bar percentage (0-100)
    ///
    /// Ignored until the transport knows the track duration.
    pub fn seek_percent(&mut self, percent: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(PlaybackError::InvalidSeekPercent(percent));
        }

        let Some(duration) = self.known_duration() else {
            debug!(percent, "Seek ignored, duration unknown");
            return Ok(());
        };

        self.transport.seek(duration.mul_f64(percent / 100.0))?;
        self.set_progress(percent);
        Ok(())
    }

    // ===== Media Notifications =====

    /// Transport started playing
    pub fn on_play(&mut self) {
        self.set_state(PlaybackState::Playing);
    }

    /// Transport paused
    pub fn on_pause(&mut self) {
        self.set_state(PlaybackState::Paused);
    }

    /// Transport reached the end of the current track
    ///
    /// Repeat restarts the same track; otherwise the sequencer picks the next.
    pub fn on_ended(&mut self) -> Result<()> {
        let previous = self.sequencer.current_index();
        self.sequencer.on_track_ended();
        self.start_current(Some(previous))
    }

    /// Transport position moved; refreshes the progress percentage
    pub fn on_time_update(&mut self) {
        let Some(duration) = self.known_duration() else {
            return;
        };
        let position = self.transport.position().min(duration);
        let percent = position.as_secs_f64() / duration.as_secs_f64() * 100.0;
        self.set_progress(percent);
    }

    // ===== Shuffle & Repeat =====

    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.sequencer.shuffle_mode());
    }

    pub fn toggle_repeat(&mut self) {
        self.set_repeat(!self.sequencer.repeat_mode());
    }

    pub fn set_shuffle(&mut self, on: bool) {
        self.sequencer.set_shuffle_mode(on);
        debug!(on, "Shuffle mode set");
        self.persist();
        self.emit_mode_changed();
    }

    pub fn set_repeat(&mut self, on: bool) {
        self.sequencer.set_repeat_mode(on);
        debug!(on, "Repeat mode set");
        self.persist();
        self.emit_mode_changed();
    }

    // ===== Volume Control =====

    /// Set volume (0-100, clamped)
    pub fn set_volume(&mut self, level: u8) -> Result<()> {
        self.volume.set_level(level);
        self.apply_volume()
    }

    pub fn mute(&mut self) -> Result<()> {
        self.volume.mute();
        self.apply_volume()
    }

    pub fn unmute(&mut self) -> Result<()> {
        self.volume.unmute();
        self.apply_volume()
    }

    pub fn toggle_mute(&mut self) -> Result<()> {
        self.volume.toggle_mute();
        self.apply_volume()
    }

    // ===== State Queries =====

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_index(&self) -> usize {
        self.sequencer.current_index()
    }

    pub fn current_track(&self) -> &Track {
        &self.playlist[self.sequencer.current_index()]
    }

    pub fn shuffle_mode(&self) -> bool {
        self.sequencer.shuffle_mode()
    }

    pub fn repeat_mode(&self) -> bool {
        self.sequencer.repeat_mode()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Last known progress (0-100)
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn sequencer(&self) -> &TrackSequencer {
        &self.sequencer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of everything the player persists
    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            volume: Some(self.volume.level()),
            muted: self.volume.is_muted(),
            ..self.sequencer.snapshot()
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Load and play the sequencer's current track
    fn start_current(&mut self, previous_index: Option<usize>) -> Result<()> {
        let index = self.sequencer.current_index();
        self.persist();
        self.progress = 0.0;
        self.pending_events.push(PlayerEvent::TrackChanged {
            index,
            previous_index,
        });

        let track = &self.playlist[index];
        debug!(index, name = %track.name, "Loading track");
        self.transport.load(&track.path)?;
        self.transport.play()
    }

    fn known_duration(&self) -> Option<std::time::Duration> {
        self.transport.duration().filter(|d| !d.is_zero())
    }

    fn apply_volume(&mut self) -> Result<()> {
        self.persist();
        self.emit_volume_changed();
        self.transport.set_volume(self.volume.gain())
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
        self.pending_events.push(PlayerEvent::ProgressChanged { percent });
    }

    /// Write the snapshot back; a failing store never fails the operation
    fn persist(&mut self) {
        let result = self
            .snapshot()
            .to_json()
            .and_then(|json| self.store.save(&self.storage_key, &json));

        if let Err(e) = result {
            warn!(key = %self.storage_key, error = %e, "Failed to persist player state");
        }
    }

    fn emit_mode_changed(&mut self) {
        self.pending_events.push(PlayerEvent::ModeChanged {
            shuffle_mode: self.sequencer.shuffle_mode(),
            repeat_mode: self.sequencer.repeat_mode(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }
}
