//! Transport commands and the session that applies them

use crate::error::{CliError, Result};
use crate::transport::SimulatedTransport;
use kwan_playback::{ConfigStore, MusicPlayer, PlayerEvent};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// One line of driver input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Next,
    Previous,
    Select(usize),
    Ended,
    Shuffle,
    Repeat,
    Seek(f64),
    Tick(u64),
    Volume(u8),
    Mute,
    Unmute,
    Status,
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  play | pause | toggle      control playback
  next | prev                next/previous track (shuffle-aware)
  select <index>             play a playlist entry
  ended                      simulate end of track
  shuffle | repeat           toggle play modes
  seek <percent>             seek to 0-100%
  tick <seconds>             let simulated time pass
  volume <0-100> | mute | unmute
  status | list | help | quit";

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        let command = match name.as_str() {
            "play" => Command::Play,
            "pause" => Command::Pause,
            "toggle" => Command::Toggle,
            "next" => Command::Next,
            "prev" | "previous" => Command::Previous,
            "select" => Command::Select(parse_arg(&name, arg)?),
            "ended" => Command::Ended,
            "shuffle" => Command::Shuffle,
            "repeat" => Command::Repeat,
            "seek" => Command::Seek(parse_arg(&name, arg)?),
            "tick" => Command::Tick(parse_arg(&name, arg)?),
            "volume" => Command::Volume(parse_arg(&name, arg)?),
            "mute" => Command::Mute,
            "unmute" => Command::Unmute,
            "status" => Command::Status,
            "list" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CliError::UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

fn parse_arg<T: FromStr>(command: &str, arg: Option<&str>) -> Result<T> {
    let value = arg.unwrap_or_default();
    value.parse().map_err(|_| CliError::InvalidArgument {
        command: command.to_string(),
        value: value.to_string(),
    })
}

/// A player bound to the simulated transport
pub struct Session<S> {
    player: MusicPlayer<SimulatedTransport, S>,
}

impl<S: ConfigStore> Session<S> {
    pub fn new(player: MusicPlayer<SimulatedTransport, S>) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &MusicPlayer<SimulatedTransport, S> {
        &self.player
    }

    /// Apply one command and return the events it produced
    pub fn execute(&mut self, command: &Command) -> Result<Vec<PlayerEvent>> {
        debug!(?command, "Executing");

        match command {
            Command::Play => {
                if !self.player.is_playing() {
                    self.player.toggle_play()?;
                }
            }
            Command::Pause => {
                if self.player.is_playing() {
                    self.player.toggle_play()?;
                }
            }
            Command::Toggle => self.player.toggle_play()?,
            Command::Next => self.player.next()?,
            Command::Previous => self.player.previous()?,
            Command::Select(index) => self.player.select(*index)?,
            Command::Ended => self.finish_track()?,
            Command::Shuffle => self.player.toggle_shuffle(),
            Command::Repeat => self.player.toggle_repeat(),
            Command::Seek(percent) => self.player.seek_percent(*percent)?,
            Command::Tick(seconds) => {
                let ended = self
                    .player
                    .transport_mut()
                    .tick(Duration::from_secs(*seconds));
                self.player.on_time_update();
                if ended {
                    self.finish_track()?;
                }
            }
            Command::Volume(level) => self.player.set_volume(*level)?,
            Command::Mute => self.player.mute()?,
            Command::Unmute => self.player.unmute()?,
            Command::Status | Command::List | Command::Help | Command::Quit => {}
        }

        self.sync_state();
        Ok(self.player.drain_events())
    }

    /// Events queued before any command ran (startup)
    pub fn startup_events(&mut self) -> Vec<PlayerEvent> {
        self.player.drain_events()
    }

    /// One-line now-playing summary
    pub fn status(&self) -> String {
        let track = self.player.current_track();
        let volume = self.player.volume();
        format!(
            "[{}] {} - {} | {} | {:.0}% | shuffle {} | repeat {} | volume {}{}",
            self.player.current_index(),
            track.name,
            track.singer,
            if self.player.is_playing() { "playing" } else { "paused" },
            self.player.progress(),
            on_off(self.player.shuffle_mode()),
            on_off(self.player.repeat_mode()),
            volume.level(),
            if volume.is_muted() { " (muted)" } else { "" },
        )
    }

    /// Playlist with the active entry marked
    pub fn listing(&self) -> Vec<String> {
        let current = self.player.current_index();
        self.player
            .playlist()
            .iter()
            .enumerate()
            .map(|(index, track)| {
                let marker = if index == current { '>' } else { ' ' };
                format!("{marker} {index:>3}  {} - {}", track.name, track.singer)
            })
            .collect()
    }

    /// The media element pauses at the end of a track, then reports "ended"
    fn finish_track(&mut self) -> Result<()> {
        self.sync_state();
        self.player.on_ended()?;
        Ok(())
    }

    /// Report transport play/pause changes back to the player
    fn sync_state(&mut self) {
        let playing = self.player.transport().is_playing();
        if playing != self.player.is_playing() {
            if playing {
                self.player.on_play();
            } else {
                self.player.on_pause();
            }
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!("next".parse::<Command>().unwrap(), Command::Next);
        assert_eq!("  PREV ".parse::<Command>().unwrap(), Command::Previous);
        assert_eq!("select 3".parse::<Command>().unwrap(), Command::Select(3));
        assert_eq!("seek 42.5".parse::<Command>().unwrap(), Command::Seek(42.5));
        assert_eq!("tick 10".parse::<Command>().unwrap(), Command::Tick(10));
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(CliError::UnknownCommand(_))
        ));
        assert!(matches!(
            "select".parse::<Command>(),
            Err(CliError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "volume loud".parse::<Command>(),
            Err(CliError::InvalidArgument { .. })
        ));
    }
}
