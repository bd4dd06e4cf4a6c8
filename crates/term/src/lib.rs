//! Terminal board renderer.
//!
//! Everything here except [`renderer`] is pure: a position goes in, a
//! [`FrameBuffer`] comes out. The renderer is the only piece that touches the
//! real terminal, flushing frames with crossterm and diffing against the last
//! frame it presented.

pub mod board_view;
pub mod fb;
pub mod glyph;
pub mod layout;
pub mod palette;
pub mod renderer;

pub use tess_core as core;
pub use tess_types as types;

pub use board_view::BoardView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use glyph::{draw_glyph, DisplayMode, Glyph, GlyphSet};
pub use layout::{BoardLayout, CellOverrides, DoesNotFit, Viewport};
pub use palette::{Palette, StyleToken};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
