//! Piece glyphs and the glyph renderer.
//!
//! A glyph is either one codepoint or a small multi-line shape. Both are drawn
//! centered in a cell and clipped to it; a glyph never touches anything outside
//! the cell rectangle it was given.

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::PieceId;

/// Visual form of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Char(char),
    Shape(&'static [&'static str]),
}

impl Glyph {
    /// (width, height) in terminal cells.
    pub fn size(&self) -> (usize, usize) {
        match self {
            Glyph::Char(_) => (1, 1),
            Glyph::Shape(rows) => (
                rows.iter().map(|r| r.chars().count()).max().unwrap_or(0),
                rows.len(),
            ),
        }
    }
}

/// Which glyph table to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Multi-line ASCII shapes.
    #[default]
    Big,
    /// One Unicode chess symbol per piece.
    Simple,
}

impl DisplayMode {
    /// Parse from string (case-insensitive): "big" | "simple".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "big" => Some(DisplayMode::Big),
            "simple" => Some(DisplayMode::Simple),
            _ => None,
        }
    }
}

static SHAPES: &[(char, &[&str])] = &[
    ('P', &[" ^ ", "(P)", "/_\\"]),
    ('N', &[" __", "/ N", "\\_/"]),
    ('B', &["  ^", " /B\\", " \\_/"]),
    ('R', &["[R]", "[R]", "[R]"]),
    ('Q', &[" Q ", "( )", " \\|"]),
    ('K', &[" K ", "(. )", " | "]),
    ('p', &[" ^ ", "(p)", "/_\\"]),
    ('n', &[" __", "/ n", "\\_/"]),
    ('b', &["  ^", " /b\\", " \\_/"]),
    ('r', &["[r]", "[r]", "[r]"]),
    ('q', &[" q ", "( )", " \\|"]),
    ('k', &[" k ", "(. )", " | "]),
];

static SYMBOLS: &[(char, char)] = &[
    ('P', '♙'),
    ('N', '♘'),
    ('B', '♗'),
    ('R', '♖'),
    ('Q', '♕'),
    ('K', '♔'),
    ('p', '♟'),
    ('n', '♞'),
    ('b', '♝'),
    ('r', '♜'),
    ('q', '♛'),
    ('k', '♚'),
];

/// Immutable piece -> glyph lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphSet {
    mode: DisplayMode,
}

impl GlyphSet {
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    /// Glyph for `piece`; `None` means draw nothing.
    pub fn glyph(&self, piece: PieceId) -> Option<Glyph> {
        let key = piece.symbol();
        match self.mode {
            DisplayMode::Big => SHAPES
                .iter()
                .find(|(c, _)| *c == key)
                .map(|(_, rows)| Glyph::Shape(rows)),
            DisplayMode::Simple => SYMBOLS
                .iter()
                .find(|(c, _)| *c == key)
                .map(|(_, ch)| Glyph::Char(*ch)),
        }
    }
}

/// Draw `glyph` centered in the cell at `(x, y)` sized `cell_w` x `cell_h`.
///
/// Offsets are floor-divided and may be negative when the glyph is larger than
/// the cell; rows and columns that land outside the cell are skipped.
pub fn draw_glyph(
    fb: &mut FrameBuffer,
    glyph: Glyph,
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
    style: CellStyle,
) {
    match glyph {
        Glyph::Char(ch) => draw_rows(fb, &[ch], 1, x, y, cell_w, cell_h, style),
        Glyph::Shape(rows) => {
            let (shape_w, _) = glyph.size();
            let mut buf: Vec<char> = Vec::with_capacity(shape_w * rows.len());
            for row in rows {
                let start = buf.len();
                buf.extend(row.chars());
                buf.resize(start + shape_w, '\0');
            }
            draw_rows(fb, &buf, shape_w, x, y, cell_w, cell_h, style);
        }
    }
}

/// `chars` is a row-major grid `shape_w` wide; `'\0'` marks a missing column
/// in a short row and is not drawn.
#[allow(clippy::too_many_arguments)]
fn draw_rows(
    fb: &mut FrameBuffer,
    chars: &[char],
    shape_w: usize,
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
    style: CellStyle,
) {
    if shape_w == 0 {
        return;
    }
    let shape_h = chars.len() / shape_w;
    let offset_x = (i32::from(cell_w) - shape_w as i32).div_euclid(2);
    let offset_y = (i32::from(cell_h) - shape_h as i32).div_euclid(2);

    for (row_idx, row) in chars.chunks(shape_w).enumerate() {
        let dy = offset_y + row_idx as i32;
        if dy < 0 || dy >= i32::from(cell_h) {
            continue;
        }
        for (col_idx, &ch) in row.iter().enumerate() {
            let dx = offset_x + col_idx as i32;
            if ch == '\0' || dx < 0 || dx >= i32::from(cell_w) {
                continue;
            }
            fb.put_char(x + dx as u16, y + dy as u16, ch, style);
        }
    }
}
