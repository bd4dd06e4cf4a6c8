//! [`Rules`] implementation backed by `shakmaty`.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, File, Move, Position, Rank, Role};

use crate::rules::{GameStatus, MoveTextError, Rules};
use crate::types::{PieceId, PieceKind, Side, Square};

/// Why FEN text could not become a starting position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("malformed FEN: {0:?}")]
    Malformed(String),
    /// Parses, but no legal game reaches it (missing king, pawns on the back rank...).
    #[error("impossible position: {0:?}")]
    Impossible(String),
}

/// A standard chess position plus the moves applied to it in this session.
#[derive(Debug, Clone, Default)]
pub struct ChessBoard {
    pos: Chess,
    history: Vec<Move>,
}

impl ChessBoard {
    /// The standard initial position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(pos: Chess) -> Self {
        Self {
            pos,
            history: Vec::new(),
        }
    }

    /// Build a position from FEN text.
    pub fn from_fen(text: &str) -> Result<Self, FenError> {
        let text = text.trim();
        let fen: Fen = text
            .parse()
            .map_err(|_| FenError::Malformed(text.to_string()))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|_| FenError::Impossible(text.to_string()))?;
        Ok(Self::from_position(pos))
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Rules for ChessBoard {
    type Move = Move;

    fn turn(&self) -> Side {
        side_from_color(self.pos.turn())
    }

    fn is_game_over(&self) -> bool {
        self.pos.is_game_over()
    }

    fn status(&self) -> GameStatus {
        if self.pos.is_checkmate() {
            GameStatus::Checkmate {
                winner: self.turn().opposite(),
            }
        } else if self.pos.is_stalemate() {
            GameStatus::Stalemate
        } else if self.pos.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else if self.pos.is_game_over() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    fn piece_at(&self, square: Square) -> Option<PieceId> {
        let sq = shakmaty::Square::from_coords(
            File::new(u32::from(square.file())),
            Rank::new(u32::from(square.rank())),
        );
        self.pos.board().piece_at(sq).map(|piece| {
            PieceId::new(kind_from_role(piece.role), side_from_color(piece.color))
        })
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.pos.legal_moves().into_iter().collect()
    }

    fn is_legal(&self, mv: &Move) -> bool {
        self.pos.legal_moves().contains(mv)
    }

    fn parse_move_text(&self, text: &str) -> Result<Move, MoveTextError> {
        let trimmed = text.trim();
        let san: SanPlus = trimmed
            .parse()
            .map_err(|_| MoveTextError::Malformed(trimmed.to_string()))?;
        san.san
            .to_move(&self.pos)
            .map_err(|_| MoveTextError::Illegal(trimmed.to_string()))
    }

    fn move_from_coordinate_text(&self, text: &str) -> Result<Move, MoveTextError> {
        let trimmed = text.trim();
        let uci: UciMove = trimmed
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| MoveTextError::Malformed(trimmed.to_string()))?;
        uci.to_move(&self.pos)
            .map_err(|_| MoveTextError::Illegal(trimmed.to_string()))
    }

    fn coordinate_text(&self, mv: &Move) -> String {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    fn mover(&self, mv: &Move) -> Option<Side> {
        let from = mv.from()?;
        self.pos
            .board()
            .piece_at(from)
            .map(|piece| side_from_color(piece.color))
    }

    fn push(&mut self, mv: Move) {
        self.pos.play_unchecked(mv);
        self.history.push(mv);
    }

    fn ply_count(&self) -> usize {
        self.history.len()
    }
}

fn side_from_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}
