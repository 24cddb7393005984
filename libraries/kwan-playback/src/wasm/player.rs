//! WASM-compatible MusicPlayer wrapper

use super::web::{AudioElementTransport, WebStorage};
use crate::{MusicPlayer, PlaybackError, PlayerConfig, Playlist, Track};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// WASM-compatible music player
///
/// Wraps the core MusicPlayer with a JavaScript-friendly API. The page wires
/// its buttons and the `<audio>` element's events to the methods below and
/// registers one callback that receives every player event as a plain object.
#[wasm_bindgen]
pub struct WasmMusicPlayer {
    inner: MusicPlayer<AudioElementTransport, WebStorage>,

    // Event callbacks
    on_event: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmMusicPlayer {
    /// Create a player over an `<audio>` element
    ///
    /// `tracks` is an array of `{name, singer, image, path}` objects. `config`
    /// is an optional partial `PlayerConfig` object. With `session` set, state
    /// goes to `sessionStorage` instead of `localStorage`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        audio: HtmlAudioElement,
        tracks: JsValue,
        config: JsValue,
        session: bool,
    ) -> Result<WasmMusicPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let tracks: Vec<Track> = serde_wasm_bindgen::from_value(tracks)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse tracks: {}", e)))?;
        let config: PlayerConfig = if config.is_undefined() || config.is_null() {
            PlayerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let store = if session {
            WebStorage::session()
        } else {
            WebStorage::local()
        }
        .map_err(to_js)?;

        let playlist = Playlist::new(tracks).map_err(to_js)?;
        let inner = MusicPlayer::new(playlist, config, AudioElementTransport::new(audio), store)
            .map_err(to_js)?;

        Ok(Self {
            inner,
            on_event: None,
            on_error: None,
        })
    }

    // ===== Button Handlers =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) -> Result<(), JsValue> {
        let result = self.inner.toggle_play();
        self.finish(result)
    }

    pub fn next(&mut self) -> Result<(), JsValue> {
        let result = self.inner.next();
        self.finish(result)
    }

    pub fn previous(&mut self) -> Result<(), JsValue> {
        let result = self.inner.previous();
        self.finish(result)
    }

    /// Playlist entry clicked
    pub fn select(&mut self, index: usize) -> Result<(), JsValue> {
        let result = self.inner.select(index);
        self.finish(result)
    }

    /// Progress bar changed (0-100)
    #[wasm_bindgen(js_name = seekPercent)]
    pub fn seek_percent(&mut self, percent: f64) -> Result<(), JsValue> {
        let result = self.inner.seek_percent(percent);
        self.finish(result)
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.toggle_shuffle();
        self.flush_events();
    }

    #[wasm_bindgen(js_name = toggleRepeat)]
    pub fn toggle_repeat(&mut self) {
        self.inner.toggle_repeat();
        self.flush_events();
    }

    /// Set volume (0-100)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: u8) -> Result<(), JsValue> {
        let result = self.inner.set_volume(level);
        self.finish(result)
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) -> Result<(), JsValue> {
        let result = self.inner.toggle_mute();
        self.finish(result)
    }

    // ===== Media Element Handlers =====

    /// `play` event of the audio element
    #[wasm_bindgen(js_name = onPlay)]
    pub fn on_play(&mut self) {
        self.inner.on_play();
        self.flush_events();
    }

    /// `pause` event of the audio element
    #[wasm_bindgen(js_name = onPause)]
    pub fn on_pause(&mut self) {
        self.inner.on_pause();
        self.flush_events();
    }

    /// `ended` event of the audio element
    #[wasm_bindgen(js_name = onEnded)]
    pub fn on_ended(&mut self) -> Result<(), JsValue> {
        let result = self.inner.on_ended();
        self.finish(result)
    }

    /// `timeupdate` event of the audio element
    #[wasm_bindgen(js_name = onTimeUpdate)]
    pub fn on_time_update(&mut self) {
        self.inner.on_time_update();
        self.flush_events();
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.current_index()
    }

    /// Current track as `{name, singer, image, path}`
    #[wasm_bindgen(js_name = currentTrack)]
    pub fn current_track(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.current_track()).unwrap_or(JsValue::NULL)
    }

    /// All tracks, for rendering the playlist
    pub fn tracks(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.playlist().tracks()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = shuffleMode)]
    pub fn shuffle_mode(&self) -> bool {
        self.inner.shuffle_mode()
    }

    #[wasm_bindgen(js_name = repeatMode)]
    pub fn repeat_mode(&self) -> bool {
        self.inner.repeat_mode()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    /// Progress 0-100
    pub fn progress(&self) -> f64 {
        self.inner.progress()
    }

    #[wasm_bindgen(js_name = getVolume)]
    pub fn get_volume(&self) -> u8 {
        self.inner.volume().level()
    }

    #[wasm_bindgen(js_name = isMuted)]
    pub fn is_muted(&self) -> bool {
        self.inner.volume().is_muted()
    }

    // ===== Event Listeners =====

    /// Register the event callback; pending startup events are delivered at once
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.on_event = Some(callback);
        self.flush_events();
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn finish(&mut self, result: crate::Result<()>) -> Result<(), JsValue> {
        self.flush_events();
        result.map_err(|e| self.handle_error(e))
    }

    fn flush_events(&mut self) {
        let events = self.inner.drain_events();
        let Some(ref cb) = self.on_event else {
            return;
        };
        for event in events {
            if let Ok(js_event) = serde_wasm_bindgen::to_value(&event) {
                cb.call1(&JsValue::NULL, &js_event).ok();
            }
        }
    }

    fn handle_error(&self, error: PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        // Emit error event
        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}

fn to_js(error: PlaybackError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
