//! BoardView: maps a position into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Rules;
use crate::fb::FrameBuffer;
use crate::glyph::{draw_glyph, GlyphSet};
use crate::layout::{BoardLayout, CellOverrides, DoesNotFit, Viewport};
use crate::palette::{Palette, StyleToken};
use crate::types::{Orientation, BOARD_SIZE, RANK_LABEL_X};

/// Board painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardView {
    glyphs: GlyphSet,
    palette: Palette,
    overrides: CellOverrides,
    orientation: Orientation,
}

impl BoardView {
    pub fn new(glyphs: GlyphSet, palette: Palette) -> Self {
        Self {
            glyphs,
            palette,
            overrides: CellOverrides::default(),
            orientation: Orientation::White,
        }
    }

    pub fn with_overrides(mut self, overrides: CellOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Geometry for this frame.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        BoardLayout::derive(viewport, self.overrides)
    }

    /// Render the board into an existing framebuffer.
    ///
    /// On success the framebuffer holds exactly one full frame and the
    /// returned layout tells the caller where the prompt rows are. When the
    /// board does not fit, the framebuffer is left untouched.
    pub fn render_into<R: Rules + ?Sized>(
        &self,
        board: &R,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Result<BoardLayout, DoesNotFit> {
        let layout = self.layout(viewport);
        layout.check(viewport)?;

        fb.resize(viewport.width, viewport.height);
        fb.clear(self.palette.style(StyleToken::Text).into_cell(' '));

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let (x, y) = layout.cell_origin(row, col);
                let style = self.palette.square(row, col);
                fb.fill_rect(x, y, layout.cell_width, layout.cell_height, ' ', style);

                let piece = self
                    .orientation
                    .square_at(row, col)
                    .and_then(|sq| board.piece_at(sq));
                if let Some(glyph) = piece.and_then(|p| self.glyphs.glyph(p)) {
                    draw_glyph(fb, glyph, x, y, layout.cell_width, layout.cell_height, style);
                }
            }
        }

        let label = self.palette.style(StyleToken::Label);
        for row in 0..BOARD_SIZE {
            if let Some(ch) = self.orientation.rank_label(row) {
                let (_, y) = layout.cell_origin(row, 0);
                fb.put_char(RANK_LABEL_X, y, ch, label);
            }
        }
        let file_y = layout.file_label_row();
        for col in 0..BOARD_SIZE {
            if let Some(ch) = self.orientation.file_label(col) {
                let (x, _) = layout.cell_origin(0, col);
                fb.put_char(x, file_y, ch, label);
            }
        }

        Ok(layout)
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: Rules + ?Sized>(
        &self,
        board: &R,
        viewport: Viewport,
    ) -> Result<(FrameBuffer, BoardLayout), DoesNotFit> {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.render_into(board, viewport, &mut fb)?;
        Ok((fb, layout))
    }
}
