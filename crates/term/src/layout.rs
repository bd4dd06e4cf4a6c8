//! Layout engine: cell geometry and screen coordinates for an 8x8 board.
//!
//! Geometry is recomputed every frame. Pinned dimensions are taken verbatim;
//! anything unpinned is derived from the live viewport so resizes apply on the
//! next frame.

use crate::types::{BOARD_SIZE, LAYOUT_MARGIN, LEFT_MARGIN, MIN_CELL, STATUS_ROW, TOP_MARGIN};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Caller-pinned cell dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellOverrides {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl CellOverrides {
    pub fn new(width: Option<u16>, height: Option<u16>) -> Self {
        Self { width, height }
    }
}

/// The viewport cannot hold the board plus its labels and prompt rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("window too small: need {required_width}x{required_height}, have {width}x{height}")]
pub struct DoesNotFit {
    pub required_width: u32,
    pub required_height: u32,
    pub width: u16,
    pub height: u16,
}

/// Concrete geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl BoardLayout {
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Derive cell size: overrides verbatim, otherwise
    /// `max(3, (dimension - 4) / 8)`.
    pub fn derive(viewport: Viewport, overrides: CellOverrides) -> Self {
        let width = overrides
            .width
            .unwrap_or_else(|| derive_cell(viewport.width));
        let height = overrides
            .height
            .unwrap_or_else(|| derive_cell(viewport.height));
        Self::new(width, height)
    }

    pub fn required_width(&self) -> u32 {
        u32::from(BOARD_SIZE) * u32::from(self.cell_width) + u32::from(LAYOUT_MARGIN)
    }

    pub fn required_height(&self) -> u32 {
        u32::from(BOARD_SIZE) * u32::from(self.cell_height) + u32::from(LAYOUT_MARGIN)
    }

    pub fn fits(&self, viewport: Viewport) -> bool {
        self.check(viewport).is_ok()
    }

    /// Validate against the live viewport.
    pub fn check(&self, viewport: Viewport) -> Result<(), DoesNotFit> {
        let required_width = self.required_width();
        let required_height = self.required_height();
        if required_width > u32::from(viewport.width) || required_height > u32::from(viewport.height)
        {
            return Err(DoesNotFit {
                required_width,
                required_height,
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(())
    }

    /// Top-left screen coordinate of the cell at screen `(row, col)`.
    ///
    /// Only meaningful once [`BoardLayout::check`] passed.
    pub fn cell_origin(&self, row: u8, col: u8) -> (u16, u16) {
        let x = u16::from(col) * self.cell_width + LEFT_MARGIN;
        let y = u16::from(row) * self.cell_height + TOP_MARGIN;
        (x, y)
    }

    pub fn status_row(&self) -> u16 {
        STATUS_ROW
    }

    /// Row of the file labels, directly under the last board row.
    pub fn file_label_row(&self) -> u16 {
        u16::from(BOARD_SIZE) * self.cell_height + TOP_MARGIN
    }

    /// Row callers put prompts and feedback on.
    pub fn prompt_row(&self) -> u16 {
        self.file_label_row() + 1
    }

    /// Row the typed move is echoed on.
    pub fn input_row(&self) -> u16 {
        self.prompt_row() + 1
    }
}

fn derive_cell(dimension: u16) -> u16 {
    MIN_CELL.max(dimension.saturating_sub(LAYOUT_MARGIN) / u16::from(BOARD_SIZE))
}
