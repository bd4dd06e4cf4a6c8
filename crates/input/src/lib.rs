//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key events
//! into [`LineEdit`]s and accumulates them in a bounded [`LineBuffer`], which is
//! how moves are typed while the terminal is in raw mode.

pub mod line;
pub mod map;

pub use tess_types as types;

pub use line::{LineBuffer, LineStatus};
pub use map::{map_key, should_quit, LineEdit};
