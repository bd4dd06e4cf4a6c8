//! Free play: both sides are entered at the keyboard.
//!
//! ```text
//!  Prompting --(parsed + legal)--> push, Prompting
//!  Prompting --(parsed, illegal)--> "Illegal move", ack, Prompting
//!  Prompting --(unparsable)-------> "Invalid move", ack, Prompting
//!  top of loop, game over --------> GameOver, ack, exit
//! ```

use anyhow::Result;

use crate::console::Console;
use crate::core::{MoveTextError, Rules};
use crate::outcome::SessionOutcome;
use crate::screen::Screen;
use crate::term::StyleToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreePlayState {
    Prompting,
    GameOver,
}

/// Result of interpreting one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Applied,
    Illegal,
    Invalid,
}

pub struct FreePlay {
    screen: Screen,
    state: FreePlayState,
}

impl FreePlay {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            state: FreePlayState::Prompting,
        }
    }

    pub fn state(&self) -> FreePlayState {
        self.state
    }

    /// Run until game over, abort, or a viewport that cannot hold the board.
    pub fn run<R, C>(&mut self, board: &mut R, console: &mut C) -> Result<SessionOutcome>
    where
        R: Rules + ?Sized,
        C: Console + ?Sized,
    {
        tracing::info!(turn = %board.turn(), "free play started");
        loop {
            let Some(layout) = self.screen.paint(&*board, console)? else {
                return Ok(SessionOutcome::DoesNotFit);
            };

            if board.is_game_over() {
                self.state = FreePlayState::GameOver;
                let status = board.status();
                tracing::info!(%status, plies = board.ply_count(), "game over");
                self.screen
                    .text(layout.status_row(), &format!("Game over: {status}"), StyleToken::Alert);
                self.screen
                    .notify(&layout, "Press any key to exit.", StyleToken::Text, console)?;
                return Ok(SessionOutcome::GameOver(status));
            }

            let prompt = format!("Enter {}'s move (e.g., e4):", board.turn());
            let Some(line) = self.screen.ask(&layout, &prompt, console)? else {
                tracing::info!("free play aborted");
                return Ok(SessionOutcome::Aborted);
            };

            match apply_text(board, line.trim()) {
                Verdict::Applied => {}
                Verdict::Illegal => self.screen.notify(
                    &layout,
                    "Illegal move. Press any key to continue.",
                    StyleToken::Alert,
                    console,
                )?,
                Verdict::Invalid => self.screen.notify(
                    &layout,
                    "Invalid or unrecognized move. Press any key.",
                    StyleToken::Alert,
                    console,
                )?,
            }
        }
    }
}

/// Parse `text` and push it if legal. The board is untouched otherwise.
pub fn apply_text<R: Rules + ?Sized>(board: &mut R, text: &str) -> Verdict {
    match board.parse_move_text(text) {
        Ok(mv) if board.is_legal(&mv) => {
            tracing::debug!(text, "move applied");
            board.push(mv);
            Verdict::Applied
        }
        Ok(_) | Err(MoveTextError::Illegal(_)) => {
            tracing::debug!(text, "illegal move rejected");
            Verdict::Illegal
        }
        Err(MoveTextError::Malformed(_)) => {
            tracing::debug!(text, "unrecognized move rejected");
            Verdict::Invalid
        }
    }
}
