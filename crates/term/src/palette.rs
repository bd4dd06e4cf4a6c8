//! Style tokens.
//!
//! The palette is built once before a session starts and handed to the
//! painter by reference; nothing mutates it afterwards.

use crate::fb::{CellStyle, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// Squares where `(row + col) % 2 == 0`.
    LightSquare,
    DarkSquare,
    Label,
    Text,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    light_square: CellStyle,
    dark_square: CellStyle,
    label: CellStyle,
    text: CellStyle,
    alert: CellStyle,
}

impl Default for Palette {
    /// Black on yellow and white on magenta squares.
    fn default() -> Self {
        let black = Rgb::new(0, 0, 0);
        Self {
            light_square: CellStyle::new(black, Rgb::new(230, 200, 60)),
            dark_square: CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(190, 60, 160)),
            label: CellStyle::new(Rgb::new(255, 255, 255), black),
            text: CellStyle::new(Rgb::new(220, 220, 220), black),
            alert: CellStyle::new(Rgb::new(255, 110, 110), black).bold(),
        }
    }
}

impl Palette {
    pub fn style(&self, token: StyleToken) -> CellStyle {
        match token {
            StyleToken::LightSquare => self.light_square,
            StyleToken::DarkSquare => self.dark_square,
            StyleToken::Label => self.label,
            StyleToken::Text => self.text,
            StyleToken::Alert => self.alert,
        }
    }

    /// Checkerboard background for screen cell `(row, col)`.
    pub fn square(&self, row: u8, col: u8) -> CellStyle {
        if (row + col) % 2 == 0 {
            self.light_square
        } else {
            self.dark_square
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_alternates() {
        let p = Palette::default();
        assert_eq!(p.square(0, 0), p.style(StyleToken::LightSquare));
        assert_eq!(p.square(0, 1), p.style(StyleToken::DarkSquare));
        assert_eq!(p.square(1, 0), p.style(StyleToken::DarkSquare));
        assert_eq!(p.square(7, 7), p.style(StyleToken::LightSquare));
        assert_ne!(p.style(StyleToken::LightSquare), p.style(StyleToken::DarkSquare));
    }
}
