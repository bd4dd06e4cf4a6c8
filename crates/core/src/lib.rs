//! Core chess module - the rules seam, records, and puzzles
//!
//! This module is everything the interaction loops need to know about chess.
//! It has **zero dependencies** on terminal I/O or networking, making it:
//!
//! - **Deterministic**: the same inputs always produce the same position
//! - **Testable**: positions can be built from FEN or PGN in a unit test
//! - **Replaceable**: the loops only see the [`Rules`] trait
//!
//! # Module Structure
//!
//! - [`rules`]: the [`Rules`] trait, [`GameStatus`], [`MoveTextError`]
//! - [`board`]: [`ChessBoard`], the `shakmaty`-backed implementation, [`FenError`]
//! - [`record`]: PGN game records and replay to a requested ply
//! - [`puzzle`]: scripted solution lines validated against a start position
//!
//! # Example
//!
//! ```
//! use tess_core::{ChessBoard, Rules};
//! use tess_core::types::Side;
//!
//! let mut board = ChessBoard::new();
//! let mv = board.parse_move_text("e4").unwrap();
//! assert!(board.is_legal(&mv));
//! board.push(mv);
//!
//! assert_eq!(board.turn(), Side::Black);
//! assert_eq!(board.ply_count(), 1);
//! ```

pub mod board;
pub mod puzzle;
pub mod record;
pub mod rules;

pub use tess_types as types;

// Re-export commonly used types for convenience
pub use board::{ChessBoard, FenError};
pub use puzzle::{Puzzle, PuzzleError};
pub use record::{load_record, parse_record, Record, RecordError};
pub use rules::{GameStatus, MoveTextError, Rules};
