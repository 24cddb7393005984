/// Kwan - terminal music player driver
use anyhow::Context;
use clap::Parser;
use kwan_cli::{commands::HELP, AppConfig, Command, Session, SimulatedTransport};
use kwan_playback::{FileStore, MusicPlayer, PlayerEvent, Playlist};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kwan")]
#[command(about = "Drive the Kwan music player from the terminal", long_about = None)]
struct Cli {
    /// Playlist JSON file (array of {name, singer, image, path})
    #[arg(short, long, env = "KWAN_PLAYLIST")]
    playlist: PathBuf,

    /// Configuration file path (defaults to ./kwan.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the state file from the configuration
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,

    /// Commands to run instead of reading stdin, e.g. "next" "shuffle" "tick 30"
    commands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kwan=info,kwan_cli=info,kwan_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(state) = cli.state {
        config.state_file = state;
    }
    config.validate()?;

    let playlist_json = std::fs::read_to_string(&cli.playlist)
        .with_context(|| format!("reading playlist {}", cli.playlist.display()))?;
    let playlist = Playlist::from_json(&playlist_json)
        .with_context(|| format!("parsing playlist {}", cli.playlist.display()))?;

    tracing::info!("Playlist: {} tracks", playlist.len());
    tracing::info!("State file: {}", config.state_file.display());

    let transport = SimulatedTransport::new(Duration::from_secs(config.track_seconds));
    let store = FileStore::new(&config.state_file);
    let player = MusicPlayer::new(playlist, config.player.clone(), transport, store)?;
    let mut session = Session::new(player);

    let mut out = io::stdout().lock();
    let startup = session.startup_events();
    print_events(&mut out, &startup, cli.json)?;

    if cli.commands.is_empty() {
        writeln!(out, "{}", session.status())?;
        out.flush()?;
        for line in io::stdin().lock().lines() {
            if !run_line(&mut session, &mut out, &line?, cli.json)? {
                break;
            }
            out.flush()?;
        }
    } else {
        for line in &cli.commands {
            if !run_line(&mut session, &mut out, line, cli.json)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns false once the session should end
fn run_line<S: kwan_playback::ConfigStore>(
    session: &mut Session<S>,
    out: &mut impl Write,
    line: &str,
    json: bool,
) -> anyhow::Result<bool> {
    if line.trim().is_empty() {
        return Ok(true);
    }

    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            writeln!(out, "error: {e}")?;
            return Ok(true);
        }
    };

    match session.execute(&command) {
        Ok(events) => print_events(out, &events, json)?,
        Err(e) => writeln!(out, "error: {e}")?,
    }

    match command {
        Command::Quit => return Ok(false),
        Command::Help => writeln!(out, "{HELP}")?,
        Command::List => {
            for entry in session.listing() {
                writeln!(out, "{entry}")?;
            }
        }
        _ => writeln!(out, "{}", session.status())?,
    }

    Ok(true)
}

fn print_events(out: &mut impl Write, events: &[PlayerEvent], json: bool) -> anyhow::Result<()> {
    if !json {
        return Ok(());
    }
    for event in events {
        writeln!(out, "{}", serde_json::to_string(event)?)?;
    }
    Ok(())
}
