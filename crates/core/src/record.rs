//! Game-record loading.
//!
//! A record is a start position plus its mainline moves. Loading resolves every
//! SAN move against the running position so that replay never has to re-check
//! legality.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use pgn_reader::{RawTag, Reader, SanPlus, Skip, Visitor};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Move, Position};

use crate::board::ChessBoard;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to read game record {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse game record: {0}")]
    Parse(#[from] std::io::Error),
    #[error("game record contains no game")]
    Empty,
    #[error("invalid FEN tag: {0:?}")]
    InvalidFen(String),
    #[error("illegal move {san:?} at ply {ply}")]
    IllegalMove { ply: usize, san: String },
}

/// A parsed game: where it starts and how it continues.
#[derive(Debug, Clone)]
pub struct Record {
    start: Chess,
    moves: Vec<Move>,
}

impl Record {
    pub fn new(start: Chess, moves: Vec<Move>) -> Self {
        Self { start, moves }
    }

    /// A fresh board at the record's start position.
    pub fn board(&self) -> ChessBoard {
        ChessBoard::from_position(self.start.clone())
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Replay the first `limit` plies (all of them when `None`).
    ///
    /// The returned board starts a new session, so its ply count is zero.
    pub fn position_at(&self, limit: Option<usize>) -> ChessBoard {
        let n = limit.unwrap_or(self.moves.len()).min(self.moves.len());
        let mut pos = self.start.clone();
        for &mv in &self.moves[..n] {
            pos.play_unchecked(mv);
        }
        ChessBoard::from_position(pos)
    }
}

/// Parse the first game of a PGN text.
pub fn parse_record(pgn: &str) -> Result<Record, RecordError> {
    let mut reader = Reader::new(pgn.as_bytes());
    let mut visitor = RecordVisitor;
    reader.read_game(&mut visitor)?.ok_or(RecordError::Empty)?
}

/// Read and parse a PGN file.
pub fn load_record(path: impl AsRef<Path>) -> Result<Record, RecordError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record = parse_record(&text)?;
    tracing::info!(path = %path.display(), plies = record.moves.len(), "loaded game record");
    Ok(record)
}

struct RecordVisitor;

#[derive(Default)]
struct RecordTags {
    fen: Option<String>,
}

struct RecordMovetext {
    start: Chess,
    pos: Chess,
    moves: Vec<Move>,
    error: Option<RecordError>,
}

impl Visitor for RecordVisitor {
    type Tags = RecordTags;
    type Movetext = RecordMovetext;
    type Output = Result<Record, RecordError>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(RecordTags::default())
    }

    fn tag(
        &mut self,
        tags: &mut Self::Tags,
        name: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        if name == b"FEN" {
            tags.fen = Some(value.decode_utf8_lossy().into_owned());
        }
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        let mut error = None;
        let start = match tags.fen {
            Some(text) => match start_from_fen(&text) {
                Some(pos) => pos,
                None => {
                    error = Some(RecordError::InvalidFen(text));
                    Chess::default()
                }
            },
            None => Chess::default(),
        };
        ControlFlow::Continue(RecordMovetext {
            pos: start.clone(),
            start,
            moves: Vec::new(),
            error,
        })
    }

    fn san(&mut self, movetext: &mut Self::Movetext, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        if movetext.error.is_some() {
            return ControlFlow::Continue(());
        }
        match san_plus.san.to_move(&movetext.pos) {
            Ok(mv) => {
                movetext.pos.play_unchecked(mv);
                movetext.moves.push(mv);
            }
            Err(_) => {
                movetext.error = Some(RecordError::IllegalMove {
                    ply: movetext.moves.len() + 1,
                    san: san_plus.to_string(),
                });
            }
        }
        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _movetext: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn end_game(&mut self, movetext: Self::Movetext) -> Self::Output {
        match movetext.error {
            Some(err) => Err(err),
            None => Ok(Record::new(movetext.start, movetext.moves)),
        }
    }
}

fn start_from_fen(text: &str) -> Option<Chess> {
    let fen: Fen = text.trim().parse().ok()?;
    fen.into_position(CastlingMode::Standard).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::types::{PieceId, PieceKind, Side, Square};

    const ITALIAN: &str = r#"[Event "Casual"]
[White "A"]
[Black "B"]
[Result "*"]

1. e4 e5 2. Nf3 Nc6 (2... d6 3. d4) 3. Bc4 *"#;

    #[test]
    fn test_parse_record_mainline_only() {
        let record = parse_record(ITALIAN).unwrap();
        assert_eq!(record.moves().len(), 5);

        let board = record.position_at(None);
        assert_eq!(board.turn(), Side::Black);
        assert_eq!(board.ply_count(), 0);
        assert_eq!(
            board.piece_at(Square::from_name("c4").unwrap()),
            Some(PieceId::new(PieceKind::Bishop, Side::White))
        );
    }

    #[test]
    fn test_position_at_limit() {
        let record = parse_record(ITALIAN).unwrap();
        let board = record.position_at(Some(2));
        assert_eq!(board.turn(), Side::White);
        assert_eq!(board.piece_at(Square::from_name("f3").unwrap()), None);

        // Limits past the end clamp.
        let board = record.position_at(Some(99));
        assert_eq!(board.turn(), Side::Black);
    }

    #[test]
    fn test_fen_tag_sets_start() {
        let pgn = r#"[FEN "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"]

1. e4 Kd7 *"#;
        let record = parse_record(pgn).unwrap();
        assert_eq!(record.board().legal_moves().len(), 6);
        let board = record.position_at(None);
        assert_eq!(
            board.piece_at(Square::from_name("d7").unwrap()),
            Some(PieceId::new(PieceKind::King, Side::Black))
        );
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let err = parse_record("1. e4 e5 2. Ke3 *").unwrap_err();
        match err {
            RecordError::IllegalMove { ply, san } => {
                assert_eq!(ply, 3);
                assert_eq!(san, "Ke3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_record_missing_file() {
        let err = load_record("/definitely/not/here.pgn").unwrap_err();
        assert!(matches!(err, RecordError::Io { .. }));
    }
}
