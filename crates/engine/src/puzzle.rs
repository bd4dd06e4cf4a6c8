//! Puzzle mode: replay a scripted solution, prompting for the solver's plies.
//!
//! The machine starts in `AutoPlay` before any step is examined, so every
//! trace opens with it even when the first step is the solver's.
//!
//! | state     | on                                   | next      |
//! |-----------|--------------------------------------|-----------|
//! | (start)   |                                      | AutoPlay  |
//! | any       | next step moved by the opponent      | AutoPlay  |
//! | any       | next step moved by the solver        | Prompting |
//! | Prompting | input equals the step text           | (advance) |
//! | Prompting | input differs                        | Failed    |
//! | any       | cursor reaches the end               | Solved    |
//!
//! Input is compared as text, case-insensitive and trimmed. Legality is never
//! consulted for the comparison.

use anyhow::Result;

use crate::console::Console;
use crate::core::{PuzzleError, Rules};
use crate::outcome::SessionOutcome;
use crate::screen::Screen;
use crate::term::StyleToken;
use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleState {
    AutoPlay,
    Prompting,
    Solved,
    Failed,
}

pub struct PuzzleLoop {
    screen: Screen,
    user_side: Side,
    state: PuzzleState,
    trace: Vec<PuzzleState>,
    cursor: usize,
}

impl PuzzleLoop {
    /// `user_side` is the side the solver plays.
    pub fn new(screen: Screen, user_side: Side) -> Self {
        Self {
            screen,
            user_side,
            state: PuzzleState::AutoPlay,
            trace: vec![PuzzleState::AutoPlay],
            cursor: 0,
        }
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    /// Every state entered, starting with the initial `AutoPlay` that exists
    /// before any step is applied.
    pub fn trace(&self) -> &[PuzzleState] {
        &self.trace
    }

    /// Solution steps applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn enter(&mut self, state: PuzzleState) {
        if self.state != state {
            self.state = state;
            self.trace.push(state);
        }
    }

    pub fn run<R, C>(
        &mut self,
        board: &mut R,
        solution: &[String],
        console: &mut C,
    ) -> Result<SessionOutcome>
    where
        R: Rules + ?Sized,
        C: Console + ?Sized,
    {
        tracing::info!(steps = solution.len(), user = %self.user_side, "puzzle started");
        while self.cursor < solution.len() {
            let Some(layout) = self.screen.paint(&*board, console)? else {
                return Ok(SessionOutcome::DoesNotFit);
            };

            let expected = solution[self.cursor].trim().to_ascii_lowercase();
            let mv = board
                .move_from_coordinate_text(&expected)
                .map_err(|err| PuzzleError::BadStep {
                    index: self.cursor,
                    text: expected.clone(),
                    reason: err.to_string(),
                })?;

            let solver_moves = board.mover(&mv).map_or(true, |side| side == self.user_side);
            if !solver_moves {
                self.enter(PuzzleState::AutoPlay);
                tracing::debug!(step = self.cursor, mv = %expected, "auto-played");
                board.push(mv);
                self.cursor += 1;
                continue;
            }

            self.enter(PuzzleState::Prompting);
            let prompt = format!("Enter {}'s move in UCI (e.g., e2e4):", board.turn());
            let Some(line) = self.screen.ask(&layout, &prompt, console)? else {
                tracing::info!(step = self.cursor, "puzzle aborted");
                return Ok(SessionOutcome::Aborted);
            };

            let got = line.trim().to_ascii_lowercase();
            if got != expected {
                self.enter(PuzzleState::Failed);
                tracing::info!(step = self.cursor, %expected, %got, "puzzle failed");
                self.screen
                    .text(layout.status_row(), "Puzzle failed.", StyleToken::Alert);
                self.screen.notify(
                    &layout,
                    &format!("Incorrect move. Expected UCI: {expected}. Press any key."),
                    StyleToken::Alert,
                    console,
                )?;
                return Ok(SessionOutcome::Failed { expected, got });
            }

            tracing::debug!(step = self.cursor, mv = %expected, "solver move accepted");
            board.push(mv);
            self.cursor += 1;
        }

        self.enter(PuzzleState::Solved);
        tracing::info!("puzzle solved");
        let Some(layout) = self.screen.paint(&*board, console)? else {
            return Ok(SessionOutcome::DoesNotFit);
        };
        self.screen.text(
            layout.status_row(),
            "Puzzle solved! Congratulations.",
            StyleToken::Text,
        );
        self.screen
            .notify(&layout, "Press any key to exit.", StyleToken::Text, console)?;
        Ok(SessionOutcome::Solved)
    }
}
