//! Terminal chess board (default binary).
//!
//! `tess` starts a fresh game, `tess <pgn_file>` continues from a saved game
//! and `tess puzzle` fetches a puzzle. Everything that can fail on the network
//! or the filesystem happens before the terminal switches to raw mode.

use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tess::engine::{Config, Session, SessionMode, TerminalConsole};
use tess::term::Palette;

fn main() -> Result<ExitCode> {
    let mode = match SessionMode::from_args(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(1));
        }
    };

    let config = Config::from_env();
    init_logging(&config)?;
    install_panic_hook();
    tracing::info!(?mode, "starting");

    let session = Session::prepare(&mode, &config)?;

    let mut console = TerminalConsole::new(&Palette::default());
    console.enter()?;
    let result = session.run(&mut console);

    // Always try to restore terminal state.
    let _ = console.exit();

    let outcome = result?;
    tracing::info!(%outcome, "exiting");
    Ok(ExitCode::SUCCESS)
}

/// File logging only: the terminal belongs to the session while it runs.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Leave raw mode before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        let _ = crossterm::terminal::disable_raw_mode();
        default_hook(info);
    }));
}
