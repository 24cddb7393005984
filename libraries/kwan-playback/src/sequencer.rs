//! Track sequencing: which track plays next
//!
//! The sequencer owns the current track index and the shuffle/repeat flags.
//! It never touches the playlist itself, only its length, so it can be
//! driven and tested without any media or rendering attached.
//!
//! Shuffle works in cycles: every index picked by [`TrackSequencer::shuffle_pick`]
//! is remembered until all tracks have been picked once, then the memory is
//! cleared and a new cycle starts.

use crate::error::{PlaybackError, Result};
use crate::snapshot::SequencerSnapshot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

/// Current-track state machine
pub struct TrackSequencer {
    /// Playlist length (>= 1)
    len: usize,

    current_index: usize,

    shuffle_mode: bool,

    repeat_mode: bool,

    /// Indices picked by shuffle during the current cycle
    played: BTreeSet<usize>,

    rng: StdRng,
}

impl TrackSequencer {
    /// Create a sequencer for a playlist of `len` tracks, starting at index 0
    pub fn new(len: usize) -> Result<Self> {
        Self::with_rng(len, StdRng::from_entropy())
    }

    /// Create a sequencer whose shuffle draws are reproducible
    pub fn with_seed(len: usize, seed: u64) -> Result<Self> {
        Self::with_rng(len, StdRng::seed_from_u64(seed))
    }

    fn with_rng(len: usize, rng: StdRng) -> Result<Self> {
        if len == 0 {
            return Err(PlaybackError::EmptyPlaylist);
        }

        Ok(Self {
            len,
            current_index: 0,
            shuffle_mode: false,
            repeat_mode: false,
            played: BTreeSet::new(),
            rng,
        })
    }

    // ===== Transitions =====

    /// Move to the next track, wrapping from the last to the first
    pub fn advance(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.len;
        debug!(index = self.current_index, "Advanced");
        self.current_index
    }

    /// Move to the previous track, wrapping from the first to the last
    pub fn retreat(&mut self) -> usize {
        self.current_index = match self.current_index {
            0 => self.len - 1,
            index => index - 1,
        };
        debug!(index = self.current_index, "Retreated");
        self.current_index
    }

    /// Pick a random track that is neither current nor already played this cycle
    ///
    /// Draws uniformly over the whole playlist and rejects until a draw fits.
    /// The played set is cleared first when no index could fit, so the loop
    /// always terminates. With a single track the current index is returned
    /// unchanged.
    pub fn shuffle_pick(&mut self) -> usize {
        if self.len == 1 {
            return self.current_index;
        }

        if self.cycle_exhausted() {
            debug!(played = self.played.len(), "Shuffle cycle complete, starting over");
            self.played.clear();
        }

        let next = loop {
            let candidate = self.rng.gen_range(0..self.len);
            if candidate != self.current_index && !self.played.contains(&candidate) {
                break candidate;
            }
        };

        self.played.insert(next);
        self.current_index = next;
        debug!(index = next, played = self.played.len(), "Shuffle picked");
        next
    }

    /// True when every index other than the current one has been played
    fn cycle_exhausted(&self) -> bool {
        let current_played = usize::from(self.played.contains(&self.current_index));
        self.played.len() - current_played >= self.len - 1
    }

    /// Transition for a track that finished playing on its own
    ///
    /// Repeat replays the same track and wins over shuffle.
    pub fn on_track_ended(&mut self) -> usize {
        if self.repeat_mode {
            debug!(index = self.current_index, "Repeating track");
            self.current_index
        } else if self.shuffle_mode {
            self.shuffle_pick()
        } else {
            self.advance()
        }
    }

    /// Select a track directly
    ///
    /// Leaves the shuffle cycle and the mode flags alone.
    pub fn jump_to(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        self.current_index = index;
        debug!(index, "Jumped");
        Ok(index)
    }

    pub fn set_shuffle_mode(&mut self, on: bool) {
        self.shuffle_mode = on;
    }

    pub fn set_repeat_mode(&mut self, on: bool) {
        self.repeat_mode = on;
    }

    // ===== Queries =====

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn shuffle_mode(&self) -> bool {
        self.shuffle_mode
    }

    pub fn repeat_mode(&self) -> bool {
        self.repeat_mode
    }

    /// Indices played in the current shuffle cycle, ascending
    pub fn played(&self) -> &BTreeSet<usize> {
        &self.played
    }

    /// Playlist length this sequencer was built for
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a sequencer cannot be built for an empty playlist
    pub fn is_empty(&self) -> bool {
        false
    }

    // ===== Persistence =====

    /// Capture the persisted part of the state
    ///
    /// The played set is not persisted; a restored session starts a fresh
    /// shuffle cycle.
    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            current_index: self.current_index,
            shuffle_mode: self.shuffle_mode,
            repeat_mode: self.repeat_mode,
            ..Default::default()
        }
    }

    /// Seed index and flags from a stored snapshot
    ///
    /// A stored index beyond the playlist (the playlist shrank since it was
    /// written) falls back to the first track.
    pub fn restore(&mut self, snapshot: &SequencerSnapshot) {
        self.current_index = if snapshot.current_index < self.len {
            snapshot.current_index
        } else {
            warn!(
                stored = snapshot.current_index,
                len = self.len,
                "Stored track index out of range, starting from the first track"
            );
            0
        };
        self.shuffle_mode = snapshot.shuffle_mode;
        self.repeat_mode = snapshot.repeat_mode;
        self.played.clear();
    }
}

impl fmt::Debug for TrackSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackSequencer")
            .field("len", &self.len)
            .field("current_index", &self.current_index)
            .field("shuffle_mode", &self.shuffle_mode)
            .field("repeat_mode", &self.repeat_mode)
            .field("played", &self.played)
            .finish_non_exhaustive()
    }
}
