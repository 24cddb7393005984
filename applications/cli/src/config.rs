/// CLI configuration
use crate::error::{CliError, Result};
use kwan_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub player: PlayerConfig,

    /// JSON file holding the persisted player state
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Length of every simulated track, in seconds
    #[serde(default = "default_track_seconds")]
    pub track_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            state_file: default_state_file(),
            track_seconds: default_track_seconds(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Without an explicit path, `kwan.toml` in the working directory is used
    /// when present. Environment variables prefixed with `KWAN_` override the
    /// file, with `__` separating nested keys (`KWAN_PLAYER__VOLUME=40`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from("kwan.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("KWAN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.track_seconds == 0 {
            return Err(CliError::Config(
                "track_seconds must be greater than zero".to_string(),
            ));
        }

        if self.player.storage_key.is_empty() {
            return Err(CliError::Config("player.storage_key is empty".to_string()));
        }

        Ok(())
    }
}

// Default values
fn default_state_file() -> PathBuf {
    PathBuf::from("kwan-state.json")
}

fn default_track_seconds() -> u64 {
    180
}
