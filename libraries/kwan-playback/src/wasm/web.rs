//! Browser implementations of the transport and store traits

use crate::error::{PlaybackError, Result};
use crate::store::ConfigStore;
use crate::transport::MediaTransport;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::{HtmlAudioElement, Storage};

fn js_error(context: &str, value: JsValue) -> String {
    match value.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => format!("{context}: {value:?}"),
    }
}

/// `<audio>` element as a media transport
pub struct AudioElementTransport {
    audio: HtmlAudioElement,
}

impl AudioElementTransport {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl MediaTransport for AudioElementTransport {
    fn load(&mut self, path: &str) -> Result<()> {
        self.audio.set_src(path);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        // The returned promise rejects when autoplay is blocked; the element
        // then never fires "play", which the player already handles.
        self.audio
            .play()
            .map(|_| ())
            .map_err(|e| PlaybackError::Transport(js_error("play", e)))
    }

    fn pause(&mut self) -> Result<()> {
        self.audio
            .pause()
            .map_err(|e| PlaybackError::Transport(js_error("pause", e)))
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.audio.set_current_time(position.as_secs_f64());
        Ok(())
    }

    fn set_volume(&mut self, gain: f64) -> Result<()> {
        self.audio.set_volume(gain.clamp(0.0, 1.0));
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        let secs = self.audio.duration();
        // NaN until metadata loads, +Inf for live streams
        (secs.is_finite() && secs > 0.0).then(|| Duration::from_secs_f64(secs))
    }

    fn position(&self) -> Duration {
        let secs = self.audio.current_time();
        if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            Duration::ZERO
        }
    }
}

/// `localStorage` / `sessionStorage` as a config store
pub struct WebStorage {
    storage: Storage,
}

impl WebStorage {
    /// Permanent storage (`window.localStorage`)
    pub fn local() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| PlaybackError::Store("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| PlaybackError::Store(js_error("localStorage", e)))?
            .ok_or_else(|| PlaybackError::Store("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }

    /// Tab-scoped storage (`window.sessionStorage`)
    pub fn session() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| PlaybackError::Store("no window".to_string()))?;
        let storage = window
            .session_storage()
            .map_err(|e| PlaybackError::Store(js_error("sessionStorage", e)))?
            .ok_or_else(|| PlaybackError::Store("sessionStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl ConfigStore for WebStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| PlaybackError::Store(js_error("getItem", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PlaybackError::Store(js_error("setItem", e)))
    }
}
