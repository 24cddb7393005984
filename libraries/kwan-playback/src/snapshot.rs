//! Persisted player state
//!
//! The snapshot is the single serialize/deserialize boundary between the
//! sequencer (plus volume) and whatever store keeps it. It is encoded as one
//! JSON object stored under a single key, e.g.
//! `{"currentIndex":3,"shuffleMode":true,"repeatMode":false}`.
//!
//! Loading is lenient: every key is optional, and older widget builds wrote
//! the index and flags as strings (`"3"`, `"true"`), which are accepted too.
//! A stored volume above 100 is clamped.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of the persisted player state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencerSnapshot {
    #[serde(default, deserialize_with = "lenient_index")]
    pub current_index: usize,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub shuffle_mode: bool,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub repeat_mode: bool,

    /// Volume level 0-100, absent when never changed
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_volume"
    )]
    pub volume: Option<u8>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub muted: bool,
}

impl SequencerSnapshot {
    /// Encode as the stored JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a stored JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Text(String),
}

fn lenient_index<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Lenient<usize>>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Lenient::Value(index)) => Ok(index),
        Some(Lenient::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid track index: {text:?}"))),
    }
}

/// Levels above 100 are clamped; a string level is parsed like an index
fn lenient_volume<'de, D>(deserializer: D) -> std::result::Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let level = match Option::<Lenient<u64>>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Lenient::Value(level)) => level,
        Some(Lenient::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid volume: {text:?}")))?,
    };
    Ok(Some(u8::try_from(level.min(100)).unwrap_or(100)))
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Lenient<bool>>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Lenient::Value(flag)) => Ok(flag),
        Some(Lenient::Text(text)) => match text.trim() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!("invalid flag: {other:?}"))),
        },
    }
}
