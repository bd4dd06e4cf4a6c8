//! One frame's worth of board plus text rows, shared by both loops.

use anyhow::Result;

use crate::console::Console;
use crate::core::Rules;
use crate::term::{BoardLayout, BoardView, FrameBuffer, StyleToken};
use crate::types::LEFT_MARGIN;

pub(crate) const TOO_SMALL: &str = "Window too small to draw the chessboard.";

/// Owns the framebuffer the loops paint into.
pub struct Screen {
    view: BoardView,
    title: String,
    fb: FrameBuffer,
}

impl Screen {
    pub fn new(view: BoardView, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Paint the board and title for the live viewport.
    ///
    /// Returns `None` when the board does not fit. The fallback message has
    /// then been shown and acknowledged and the caller must end its session.
    pub fn paint<R, C>(&mut self, board: &R, console: &mut C) -> Result<Option<BoardLayout>>
    where
        R: Rules + ?Sized,
        C: Console + ?Sized,
    {
        let viewport = console.viewport()?;
        match self.view.render_into(board, viewport, &mut self.fb) {
            Ok(layout) => {
                let title = self.title.clone();
                self.text(layout.status_row(), &title, StyleToken::Text);
                Ok(Some(layout))
            }
            Err(err) => {
                tracing::warn!(%err, "board does not fit");
                let text = self.view.palette().style(StyleToken::Text);
                self.fb.resize(viewport.width, viewport.height);
                self.fb.clear(text.into_cell(' '));
                self.fb.put_str(
                    0,
                    0,
                    TOO_SMALL,
                    self.view.palette().style(StyleToken::Alert),
                );
                console.present(&self.fb)?;
                console.wait_key()?;
                Ok(None)
            }
        }
    }

    /// Replace row `y` with `text`.
    pub fn text(&mut self, y: u16, text: &str, token: StyleToken) {
        let style = self.view.palette().style(token);
        self.fb.clear_row(y, style);
        self.fb.put_str(0, y, text, style);
    }

    /// Show `message` on the prompt row and block for one key press.
    pub fn notify<C: Console + ?Sized>(
        &mut self,
        layout: &BoardLayout,
        message: &str,
        token: StyleToken,
        console: &mut C,
    ) -> Result<()> {
        self.text(layout.prompt_row(), message, token);
        self.text(layout.input_row(), "", StyleToken::Text);
        console.present(&self.fb)?;
        console.wait_key()
    }

    /// Show `prompt` and block for one line of input.
    pub fn ask<C: Console + ?Sized>(
        &mut self,
        layout: &BoardLayout,
        prompt: &str,
        console: &mut C,
    ) -> Result<Option<String>> {
        self.text(layout.prompt_row(), prompt, StyleToken::Text);
        self.text(layout.input_row(), "", StyleToken::Text);
        console.present(&self.fb)?;
        console.read_line(&self.fb, LEFT_MARGIN, layout.input_row())
    }
}
