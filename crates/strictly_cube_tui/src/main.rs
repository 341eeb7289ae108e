//! Strictly Cube - terminal 3x3x3 tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::Duration;
use strictly_cube_tui::{
    App, Cli, Command, KeyValueStore, Preference, Preferences, PrefsAction, TomlFileStore, draw,
};
use strum::IntoEnumIterator;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_game(&cli.prefs),
        Command::Prefs { action } => run_prefs(&cli.prefs, action),
    }
}

/// Logs to a file so output never lands on the game screen.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(prefs = %prefs_path.display()))]
fn run_game(prefs_path: &Path) -> Result<()> {
    info!("Starting Strictly Cube");

    let store = TomlFileStore::open(prefs_path).context("Failed to open preferences")?;
    let app = App::new(store);

    enable_raw_mode()?;
    let res = (|| -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        run_app(&mut terminal, app)
    })();
    let restored = restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Strictly Cube exited");
    res.and(restored)
}

/// Leaves raw mode and the alternate screen, whether or not setup finished.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<S>,
) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}

/// Prints or updates stored preferences.
#[instrument(skip_all, fields(prefs = %prefs_path.display()))]
fn run_prefs(prefs_path: &Path, action: PrefsAction) -> Result<()> {
    let mut store = TomlFileStore::open(prefs_path).context("Failed to open preferences")?;
    let mut prefs = Preferences::load(&store);

    match action {
        PrefsAction::Show => {
            for pref in Preference::iter() {
                println!("{} = {}", pref.key(), prefs.get(pref));
            }
        }
        PrefsAction::Set { key, value } => {
            let pref = Preference::from_key(&key)
                .with_context(|| format!("Unknown preference '{}'", key))?;
            let value: bool = value
                .parse()
                .with_context(|| format!("Expected true or false, got '{}'", value))?;
            prefs.set(pref, value, &mut store)?;
            info!(key = %key, value, "Preference updated");
            println!("{} = {}", pref.key(), value);
        }
    }
    Ok(())
}
