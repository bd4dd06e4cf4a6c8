//! Session driver: choose a mode, build the starting position, run one loop.
//!
//! All file and network work happens in [`Session::prepare`]. Once a loop is
//! running the only I/O is the console.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::adapter::{FetchError, PuzzleFetcher};
use crate::config::Config;
use crate::console::Console;
use crate::core::{load_record, ChessBoard, Puzzle, RecordError};
use crate::free_play::FreePlay;
use crate::outcome::SessionOutcome;
use crate::puzzle::PuzzleLoop;
use crate::screen::Screen;
use crate::term::BoardView;

/// Keyword selecting puzzle mode.
pub const PUZZLE_KEYWORD: &str = "puzzle";

pub const USAGE: &str = "Usage: tess [pgn_file | puzzle]";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Usage: tess [pgn_file | puzzle]")]
pub struct UsageError;

/// Startup failures. None of these can happen once a loop is running.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Fresh,
    Record(PathBuf),
    Puzzle,
}

impl SessionMode {
    /// Resolve from the positional arguments (program name excluded).
    pub fn from_args<I, S>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mode = match args.next() {
            None => SessionMode::Fresh,
            Some(arg) if arg == PUZZLE_KEYWORD => SessionMode::Puzzle,
            Some(arg) => SessionMode::Record(PathBuf::from(arg)),
        };
        if args.next().is_some() {
            return Err(UsageError);
        }
        Ok(mode)
    }
}

enum Setup {
    Game { board: ChessBoard, title: String },
    Puzzle(Puzzle),
}

/// A prepared session, ready to run against a console.
pub struct Session {
    view: BoardView,
    setup: Setup,
}

impl Session {
    /// Build the starting position for `mode`. Fetches or reads as needed.
    pub fn prepare(mode: &SessionMode, config: &Config) -> Result<Self, SessionError> {
        let view = config.board_view();
        let session = match mode {
            SessionMode::Fresh => Self::free_play(view, ChessBoard::new(), "Free play"),
            SessionMode::Record(path) => {
                let record = load_record(path)?;
                let board = record.position_at(config.record_ply);
                Self::free_play(view, board, record_title(path))
            }
            SessionMode::Puzzle => {
                let puzzle = PuzzleFetcher::new(config.fetch.clone())?.fetch_next()?;
                Self::puzzle(view, puzzle)
            }
        };
        Ok(session)
    }

    pub fn free_play(view: BoardView, board: ChessBoard, title: impl Into<String>) -> Self {
        Self {
            view,
            setup: Setup::Game {
                board,
                title: title.into(),
            },
        }
    }

    pub fn puzzle(view: BoardView, puzzle: Puzzle) -> Self {
        Self {
            view,
            setup: Setup::Puzzle(puzzle),
        }
    }

    /// Starting position of the prepared session.
    pub fn board(&self) -> &ChessBoard {
        match &self.setup {
            Setup::Game { board, .. } => board,
            Setup::Puzzle(puzzle) => puzzle.board(),
        }
    }

    /// Run the loop this session was prepared for.
    pub fn run<C: Console + ?Sized>(self, console: &mut C) -> Result<SessionOutcome> {
        let outcome = match self.setup {
            Setup::Game { mut board, title } => {
                FreePlay::new(Screen::new(self.view, title)).run(&mut board, console)?
            }
            Setup::Puzzle(puzzle) => {
                let title = puzzle_title(&puzzle);
                let user_side = puzzle.user_side();
                let (mut board, solution) = puzzle.into_parts();
                PuzzleLoop::new(Screen::new(self.view, title), user_side).run(
                    &mut board,
                    &solution,
                    console,
                )?
            }
        };
        tracing::info!(%outcome, "session finished");
        Ok(outcome)
    }
}

fn record_title(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Game: {name}")
}

fn puzzle_title(puzzle: &Puzzle) -> String {
    match puzzle.rating {
        Some(rating) => format!("Puzzle {} (rating {rating})", puzzle.id),
        None => format!("Puzzle {}", puzzle.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::core::Rules;
    use crate::term::Viewport;

    #[test]
    fn test_mode_from_args() {
        assert_eq!(SessionMode::from_args(Vec::<String>::new()), Ok(SessionMode::Fresh));
        assert_eq!(SessionMode::from_args(["puzzle"]), Ok(SessionMode::Puzzle));
        assert_eq!(
            SessionMode::from_args(["games/opera.pgn"]),
            Ok(SessionMode::Record(PathBuf::from("games/opera.pgn")))
        );
        assert_eq!(SessionMode::from_args(["a.pgn", "b.pgn"]), Err(UsageError));
        assert_eq!(UsageError.to_string(), USAGE);
    }

    #[test]
    fn test_missing_record_is_startup_error() {
        let mode = SessionMode::Record(PathBuf::from("/nonexistent/tess/game.pgn"));
        let err = Session::prepare(&mode, &Config::default()).err().unwrap();
        assert!(matches!(err, SessionError::Record(RecordError::Io { .. })));
    }

    #[test]
    fn test_fresh_session_runs_free_play() {
        let session = Session::prepare(&SessionMode::Fresh, &Config::default()).unwrap();
        assert_eq!(session.board().ply_count(), 0);
        let mut console = ScriptedConsole::new(Viewport::new(80, 40), ["e4"]);
        let outcome = session.run(&mut console).unwrap();
        assert_eq!(outcome, SessionOutcome::Aborted);
        assert!(console.frames()[0].starts_with("Free play"));
    }

    #[test]
    fn test_puzzle_title_includes_rating() {
        let board = ChessBoard::from_fen("3r3k/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let puzzle = Puzzle::new("abc12", Some(1500), board, vec!["d1a4".to_string()]).unwrap();
        assert_eq!(puzzle_title(&puzzle), "Puzzle abc12 (rating 1500)");
    }
}
