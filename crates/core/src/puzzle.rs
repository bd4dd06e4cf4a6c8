//! Scripted puzzles: a start position plus an exact coordinate-notation line.

use crate::board::ChessBoard;
use crate::record::{parse_record, RecordError};
use crate::rules::Rules;
use crate::types::Side;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle has an empty solution")]
    EmptySolution,
    #[error("solution step {index} ({text:?}) is not playable: {reason}")]
    BadStep {
        index: usize,
        text: String,
        reason: String,
    },
    #[error("puzzle game record is invalid: {0}")]
    Record(#[from] RecordError),
}

/// A puzzle ready to be played.
///
/// The solution has been replayed once against `board`, so every step is known
/// to decode and to be legal in sequence.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub id: String,
    pub rating: Option<u16>,
    board: ChessBoard,
    solution: Vec<String>,
}

impl Puzzle {
    /// Validate `solution` against `board` and build the puzzle.
    ///
    /// Steps are normalized to trimmed lower-case text.
    pub fn new(
        id: impl Into<String>,
        rating: Option<u16>,
        board: ChessBoard,
        solution: Vec<String>,
    ) -> Result<Self, PuzzleError> {
        if solution.is_empty() {
            return Err(PuzzleError::EmptySolution);
        }
        let solution: Vec<String> = solution
            .into_iter()
            .map(|s| s.trim().to_ascii_lowercase())
            .collect();

        let mut replay = board.clone();
        for (index, text) in solution.iter().enumerate() {
            let mv = replay
                .move_from_coordinate_text(text)
                .map_err(|err| PuzzleError::BadStep {
                    index,
                    text: text.clone(),
                    reason: err.to_string(),
                })?;
            replay.push(mv);
        }

        Ok(Self {
            id: id.into(),
            rating,
            board,
            solution,
        })
    }

    /// Build from a game record replayed to `initial_ply + 1` plies, the
    /// position right after the move that sets up the puzzle.
    pub fn from_game(
        id: impl Into<String>,
        rating: Option<u16>,
        pgn: &str,
        initial_ply: usize,
        solution: Vec<String>,
    ) -> Result<Self, PuzzleError> {
        let record = parse_record(pgn)?;
        let board = record.position_at(Some(initial_ply + 1));
        Self::new(id, rating, board, solution)
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    pub fn solution(&self) -> &[String] {
        &self.solution
    }

    /// The side the solver plays: whoever is to move at the start.
    pub fn user_side(&self) -> Side {
        self.board.turn()
    }

    pub fn into_parts(self) -> (ChessBoard, Vec<String>) {
        (self.board, self.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_puzzle_normalizes_solution() {
        let p = Puzzle::new("x", None, ChessBoard::new(), steps(&[" E2E4 ", "e7e5"])).unwrap();
        assert_eq!(p.solution(), &["e2e4".to_string(), "e7e5".to_string()]);
        assert_eq!(p.user_side(), Side::White);
    }

    #[test]
    fn test_puzzle_rejects_empty_solution() {
        let err = Puzzle::new("x", None, ChessBoard::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, PuzzleError::EmptySolution));
    }

    #[test]
    fn test_puzzle_rejects_unplayable_step() {
        let err = Puzzle::new("x", None, ChessBoard::new(), steps(&["e2e4", "e2e4"])).unwrap_err();
        match err {
            PuzzleError::BadStep { index, text, .. } => {
                assert_eq!(index, 1);
                assert_eq!(text, "e2e4");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_puzzle_from_game_starts_after_initial_ply() {
        // initial_ply 4 => five plies played, Black to move.
        let p = Puzzle::from_game(
            "abc",
            Some(1500),
            "1. e4 e5 2. Qh5 Nc6 3. Bc4 *",
            4,
            steps(&["g8f6", "h5f7"]),
        )
        .unwrap();
        assert_eq!(p.user_side(), Side::Black);
        assert_eq!(p.rating, Some(1500));
        assert_eq!(p.id, "abc");
    }
}
