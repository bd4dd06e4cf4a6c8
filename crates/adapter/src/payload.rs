//! Wire types for the puzzle endpoint.

use serde::{Deserialize, Serialize};

use crate::core::{Puzzle, PuzzleError};

/// Body of `GET /api/puzzle/next`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPuzzle {
    pub game: PuzzleGame,
    pub puzzle: PuzzleInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleGame {
    pub id: String,
    /// Movetext of the source game, usually without tags.
    pub pgn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleInfo {
    pub id: String,
    #[serde(default)]
    pub rating: Option<u16>,
    /// Coordinate-notation moves, e.g. `"e2e4"`.
    pub solution: Vec<String>,
    pub initial_ply: usize,
}

impl NextPuzzle {
    /// Replay the game and validate the solution.
    pub fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        Puzzle::from_game(
            self.puzzle.id,
            self.puzzle.rating,
            &self.game.pgn,
            self.puzzle.initial_ply,
            self.puzzle.solution,
        )
    }
}
