//! WASM bindings for kwan-playback
//!
//! This module provides WebAssembly bindings for the MusicPlayer, driving
//! an `<audio>` element and persisting state to web storage.

pub mod player;
pub mod web;

pub use player::WasmMusicPlayer;
pub use web::{AudioElementTransport, WebStorage};
