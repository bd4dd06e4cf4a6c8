//! Core types module - shared vocabulary for the board and the screen
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules adapter, rendering, interaction loops).
//!
//! # Board Addressing
//!
//! Squares are addressed by zero-based file and rank:
//!
//! - **File**: 0 = A .. 7 = H
//! - **Rank**: 0 = rank 1 .. 7 = rank 8
//!
//! # Screen Layout Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LEFT_MARGIN` | 3 | First board column (rank labels live left of it) |
//! | `TOP_MARGIN` | 1 | First board row (row 0 is the status line) |
//! | `RANK_LABEL_X` | 1 | Column of the rank labels |
//! | `LAYOUT_MARGIN` | 4 | Extra columns/rows required beyond `8 * cell` |
//! | `MIN_CELL` | 3 | Smallest derived cell dimension |
//!
//! # Examples
//!
//! ```
//! use tess_types::{PieceId, PieceKind, Side, Square};
//!
//! let sq = Square::from_name("e4").unwrap();
//! assert_eq!(sq.file(), 4);
//! assert_eq!(sq.rank(), 3);
//! assert_eq!(sq.to_string(), "e4");
//!
//! let knight = PieceId::new(PieceKind::Knight, Side::Black);
//! assert_eq!(knight.symbol(), 'n');
//! assert_eq!(Side::White.opposite(), Side::Black);
//! ```

use std::fmt;

/// Number of files and ranks.
pub const BOARD_SIZE: u8 = 8;

/// First screen column used by board cells.
pub const LEFT_MARGIN: u16 = 3;

/// First screen row used by board cells.
pub const TOP_MARGIN: u16 = 1;

/// Screen column holding the rank labels.
pub const RANK_LABEL_X: u16 = 1;

/// Screen row holding status text.
pub const STATUS_ROW: u16 = 0;

/// Columns/rows required beyond `8 * cell` on each axis.
pub const LAYOUT_MARGIN: u16 = 4;

/// Smallest cell dimension the layout engine derives on its own.
pub const MIN_CELL: u16 = 3;

/// Upper bound for a typed move.
pub const MAX_INPUT_LEN: usize = 32;

/// The two sides of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Capitalized display name used in prompts.
    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six chess piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Upper-case letter for the piece kind.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse from a piece letter (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tess_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('q'), Some(PieceKind::Queen));
    /// assert_eq!(PieceKind::from_letter('N'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_letter('x'), None);
    /// ```
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece identity: kind x side (12 variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub kind: PieceKind,
    pub side: Side,
}

impl PieceId {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// FEN-style symbol: upper-case for White, lower-case for Black.
    pub fn symbol(self) -> char {
        match self.side {
            Side::White => self.kind.letter(),
            Side::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Inverse of [`PieceId::symbol`].
    pub fn from_symbol(c: char) -> Option<Self> {
        let kind = PieceKind::from_letter(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Self { kind, side })
    }
}

/// A board square addressed by zero-based file and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square; returns `None` when either coordinate is off the board.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Parse a lower- or upper-case square name such as `e4`.
    pub fn from_name(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let f = chars.next()?.to_ascii_lowercase();
        let r = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&f) || !('1'..='8').contains(&r) {
            return None;
        }
        Self::new(f as u8 - b'a', r as u8 - b'1')
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'1' + self.rank) as char
        )
    }
}

/// Which side of the board is drawn at the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Rank 8 at the top, file A on the left.
    #[default]
    White,
    /// Rank 1 at the top, file H on the left.
    Black,
}

impl Orientation {
    /// Map a screen (row, col) to the square drawn there.
    ///
    /// # Examples
    ///
    /// ```
    /// use tess_types::{Orientation, Square};
    ///
    /// assert_eq!(Orientation::White.square_at(0, 0), Square::from_name("a8"));
    /// assert_eq!(Orientation::White.square_at(7, 7), Square::from_name("h1"));
    /// assert_eq!(Orientation::Black.square_at(0, 0), Square::from_name("h1"));
    /// ```
    pub fn square_at(self, row: u8, col: u8) -> Option<Square> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        match self {
            Orientation::White => Square::new(col, 7 - row),
            Orientation::Black => Square::new(7 - col, row),
        }
    }

    /// Rank label drawn next to screen row `row`; `None` off the board.
    pub fn rank_label(self, row: u8) -> Option<char> {
        if row >= BOARD_SIZE {
            return None;
        }
        Some(match self {
            Orientation::White => (b'8' - row) as char,
            Orientation::Black => (b'1' + row) as char,
        })
    }

    /// File label drawn under screen column `col`; `None` off the board.
    pub fn file_label(self, col: u8) -> Option<char> {
        if col >= BOARD_SIZE {
            return None;
        }
        Some(match self {
            Orientation::White => (b'A' + col) as char,
            Orientation::Black => (b'H' - col) as char,
        })
    }

    /// Parse from a string (case-insensitive): "white" | "w", "black" | "b".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" | "w" => Some(Orientation::White),
            "black" | "b" => Some(Orientation::Black),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_names_round_trip() {
        for file in 0..8 {
            for rank in 0..8 {
                let sq = Square::new(file, rank).unwrap();
                assert_eq!(Square::from_name(&sq.to_string()), Some(sq));
            }
        }
        assert_eq!(Square::from_name("E4"), Square::new(4, 3));
        assert_eq!(Square::from_name("i1"), None);
        assert_eq!(Square::from_name("a9"), None);
        assert_eq!(Square::from_name("a10"), None);
    }

    #[test]
    fn test_square_rejects_off_board() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_piece_symbols() {
        assert_eq!(PieceId::new(PieceKind::King, Side::White).symbol(), 'K');
        assert_eq!(PieceId::new(PieceKind::Pawn, Side::Black).symbol(), 'p');
        for kind in PieceKind::ALL {
            for side in [Side::White, Side::Black] {
                let id = PieceId::new(kind, side);
                assert_eq!(PieceId::from_symbol(id.symbol()), Some(id));
            }
        }
    }

    #[test]
    fn test_orientation_labels() {
        assert_eq!(Orientation::White.rank_label(0), Some('8'));
        assert_eq!(Orientation::White.rank_label(7), Some('1'));
        assert_eq!(Orientation::White.file_label(0), Some('A'));
        assert_eq!(Orientation::Black.rank_label(0), Some('1'));
        assert_eq!(Orientation::Black.file_label(0), Some('H'));
        assert_eq!(Orientation::Black.file_label(7), Some('A'));
    }

    #[test]
    fn test_orientation_labels_off_board() {
        for o in [Orientation::White, Orientation::Black] {
            assert_eq!(o.rank_label(8), None);
            assert_eq!(o.file_label(8), None);
            assert_eq!(o.rank_label(u8::MAX), None);
            assert_eq!(o.file_label(u8::MAX), None);
        }
    }

    #[test]
    fn test_orientation_covers_every_square_once() {
        for orientation in [Orientation::White, Orientation::Black] {
            let mut seen = std::collections::HashSet::new();
            for row in 0..8 {
                for col in 0..8 {
                    assert!(seen.insert(orientation.square_at(row, col).unwrap()));
                }
            }
            assert_eq!(seen.len(), 64);
        }
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!(Orientation::from_str("Black"), Some(Orientation::Black));
        assert_eq!(Orientation::from_str("w"), Some(Orientation::White));
        assert_eq!(Orientation::from_str("up"), None);
    }
}
