//! Rules-engine seam.
//!
//! The interaction loops and the board painter only talk to a position through
//! [`Rules`]. Any chess implementation that can answer these queries can drive
//! a session; [`crate::ChessBoard`] is the shipped one.

use std::fmt;

use crate::types::{PieceId, Side, Square};

/// Why a piece of move text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveTextError {
    /// Not well-formed move notation at all.
    #[error("unrecognized move notation: {0:?}")]
    Malformed(String),
    /// Well-formed, but there is no such legal move in the position.
    #[error("illegal move: {0:?}")]
    Illegal(String),
}

/// Final (or current) status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Side },
    Stalemate,
    InsufficientMaterial,
    /// Any other terminal condition reported by the rules engine.
    Draw,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::InsufficientMaterial => f.write_str("draw by insufficient material"),
            GameStatus::Draw => f.write_str("draw"),
        }
    }
}

/// A position that can be queried and advanced by the interaction loops.
pub trait Rules {
    type Move: Clone + PartialEq + fmt::Debug;

    /// Side whose move is next.
    fn turn(&self) -> Side;

    fn is_game_over(&self) -> bool;

    fn status(&self) -> GameStatus;

    fn piece_at(&self, square: Square) -> Option<PieceId>;

    fn legal_moves(&self) -> Vec<Self::Move>;

    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Interpret free-play input (algebraic notation).
    fn parse_move_text(&self, text: &str) -> Result<Self::Move, MoveTextError>;

    /// Decode coordinate notation (`e2e4`, `e7e8q`) in this position.
    fn move_from_coordinate_text(&self, text: &str) -> Result<Self::Move, MoveTextError>;

    fn coordinate_text(&self, mv: &Self::Move) -> String;

    /// Color of the piece that would make `mv`, if any.
    fn mover(&self, mv: &Self::Move) -> Option<Side>;

    /// Apply a move. Callers guarantee legality.
    fn push(&mut self, mv: Self::Move);

    /// Plies applied since this board was handed to a session.
    fn ply_count(&self) -> usize;
}
