//! Simulated media transport
//!
//! Stands in for the browser `<audio>` element: it keeps a play flag and a
//! clock that only moves when the driver calls [`SimulatedTransport::tick`].

use kwan_playback::{MediaTransport, Result};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    src: Option<String>,
    playing: bool,
    position: Duration,
    track_length: Duration,
    gain: f64,
}

impl SimulatedTransport {
    /// Every loaded track lasts `track_length`
    pub fn new(track_length: Duration) -> Self {
        Self {
            src: None,
            playing: false,
            position: Duration::ZERO,
            track_length,
            gain: 1.0,
        }
    }

    /// Advance the clock while playing
    ///
    /// Returns true when the track reached its end during this tick.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.playing || self.src.is_none() {
            return false;
        }

        self.position = self.position.saturating_add(elapsed).min(self.track_length);
        if self.position >= self.track_length {
            // A media element stops on its own at the end
            self.playing = false;
            return true;
        }
        false
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }
}

impl MediaTransport for SimulatedTransport {
    fn load(&mut self, path: &str) -> Result<()> {
        debug!(path, "Simulated load");
        self.src = Some(path.to_string());
        self.playing = false;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.src.is_some() {
            self.playing = true;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.position = position.min(self.track_length);
        Ok(())
    }

    fn set_volume(&mut self, gain: f64) -> Result<()> {
        self.gain = gain;
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        self.src.as_ref().map(|_| self.track_length)
    }

    fn position(&self) -> Duration {
        self.position
    }
}
