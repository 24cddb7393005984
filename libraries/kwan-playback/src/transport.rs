//! Platform-agnostic media transport trait
//!
//! Abstracts the object that actually plays audio (an `<audio>` element in
//! the browser, a simulated clock in the CLI). The player tells the transport
//! what to do; the transport reports back through the player's `on_*`
//! notification methods.

use crate::error::Result;
use std::time::Duration;

/// Playback object driven by the player
pub trait MediaTransport {
    /// Point the transport at a new media reference
    ///
    /// Loading resets the position to the start and does not start playback.
    fn load(&mut self, path: &str) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    /// Seek to a position from the start of the loaded media
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set linear output volume (0.0-1.0)
    fn set_volume(&mut self, gain: f64) -> Result<()>;

    /// Duration of the loaded media, `None` until known
    fn duration(&self) -> Option<Duration>;

    fn position(&self) -> Duration;
}

/// Transport that records every call, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub calls: Vec<String>,
    pub duration: Option<Duration>,
    pub position: Duration,
    pub gain: f64,
}

#[cfg(test)]
impl MediaTransport for RecordingTransport {
    fn load(&mut self, path: &str) -> Result<()> {
        self.calls.push(format!("load {path}"));
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push("play".to_string());
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.push("pause".to_string());
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.calls.push(format!("seek {}", position.as_secs_f64()));
        self.position = position;
        Ok(())
    }

    fn set_volume(&mut self, gain: f64) -> Result<()> {
        self.gain = gain;
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn position(&self) -> Duration {
        self.position
    }
}
