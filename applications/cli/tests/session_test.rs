//! Session tests: command sequences against the simulated transport

use kwan_cli::{Command, Session, SimulatedTransport};
use kwan_playback::{
    ConfigStore, FileStore, MediaTransport, MemoryStore, MusicPlayer, PlayerConfig, PlayerEvent, Playlist,
    SequencerSnapshot, Track,
};
use std::time::Duration;

// ===== Test Helpers =====

fn playlist(len: usize) -> Playlist {
    Playlist::new(
        (0..len)
            .map(|i| {
                Track::new(
                    format!("Song {i}"),
                    format!("Singer {i}"),
                    format!("/img/{i}.jpg"),
                    format!("/music/{i}.mp3"),
                )
            })
            .collect(),
    )
    .unwrap()
}

fn config() -> PlayerConfig {
    PlayerConfig {
        shuffle_seed: Some(5),
        ..Default::default()
    }
}

fn session<S: ConfigStore>(len: usize, store: S) -> Session<S> {
    let transport = SimulatedTransport::new(Duration::from_secs(60));
    Session::new(MusicPlayer::new(playlist(len), config(), transport, store).unwrap())
}

fn run<S: ConfigStore>(session: &mut Session<S>, line: &str) -> Vec<PlayerEvent> {
    let command: Command = line.parse().unwrap();
    session.execute(&command).unwrap()
}

// ===== Tests =====

#[test]
fn play_reports_state_back() {
    let mut session = session(3, MemoryStore::new());
    session.startup_events();

    let events = run(&mut session, "play");
    assert!(events.contains(&PlayerEvent::StateChanged {
        state: kwan_playback::PlaybackState::Playing
    }));
    assert!(session.player().is_playing());

    run(&mut session, "pause");
    assert!(!session.player().is_playing());
}

#[test]
fn track_plays_to_the_end_and_advances() {
    let mut session = session(3, MemoryStore::new());
    run(&mut session, "play");

    run(&mut session, "tick 30");
    assert!((session.player().progress() - 50.0).abs() < 1e-9);

    let events = run(&mut session, "tick 45");
    assert_eq!(session.player().current_index(), 1);
    assert!(session.player().is_playing());
    assert!(events.contains(&PlayerEvent::TrackChanged {
        index: 1,
        previous_index: Some(0)
    }));
    assert_eq!(
        session.player().transport().src(),
        Some("/music/1.mp3")
    );
}

#[test]
fn repeat_replays_the_same_track() {
    let mut session = session(3, MemoryStore::new());
    run(&mut session, "select 2");
    run(&mut session, "repeat");

    run(&mut session, "tick 120");
    assert_eq!(session.player().current_index(), 2);
    assert!(session.player().is_playing());
    assert_eq!(session.player().transport().position(), Duration::ZERO);
}

#[test]
fn shuffle_cycle_covers_every_track() {
    let mut session = session(6, MemoryStore::new());
    run(&mut session, "shuffle");

    let mut seen = std::collections::HashSet::new();
    for _ in 0..6 {
        run(&mut session, "next");
        seen.insert(session.player().current_index());
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn state_survives_restart_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut first = session(5, FileStore::new(&path));
        run(&mut first, "select 3");
        run(&mut first, "shuffle");
        run(&mut first, "repeat");
        run(&mut first, "volume 25");
    }

    let second = session(5, FileStore::new(&path));
    assert_eq!(second.player().current_index(), 3);
    assert!(second.player().shuffle_mode());
    assert!(second.player().repeat_mode());
    assert_eq!(second.player().volume().level(), 25);
    assert!((second.player().transport().gain() - 0.25).abs() < 1e-9);

    let stored = FileStore::new(&path).load("KWAN_PLAYER").unwrap().unwrap();
    let snapshot = SequencerSnapshot::from_json(&stored).unwrap();
    assert_eq!(snapshot.current_index, 3);
}

#[test]
fn status_and_listing() {
    let mut session = session(3, MemoryStore::new());
    run(&mut session, "next");

    let status = session.status();
    assert!(status.starts_with("[1] Song 1 - Singer 1"));
    assert!(status.contains("shuffle off"));

    let listing = session.listing();
    assert_eq!(listing.len(), 3);
    assert!(listing[1].starts_with('>'));
    assert!(listing[0].starts_with(' '));
}

#[test]
fn out_of_range_select_is_an_error() {
    let mut session = session(2, MemoryStore::new());
    let command: Command = "select 9".parse().unwrap();
    assert!(session.execute(&command).is_err());
    assert_eq!(session.player().current_index(), 0);
}
