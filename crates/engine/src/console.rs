//! The interaction boundary.
//!
//! Loops never touch the terminal directly. They hand complete frames to a
//! [`Console`] and block on its two reads: one line of text, or one key press.

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::input::{map_key, LineBuffer, LineStatus};
use crate::term::{CellStyle, FrameBuffer, Palette, StyleToken, TerminalRenderer, Viewport};

pub trait Console {
    /// Live viewport size; queried once per frame.
    fn viewport(&mut self) -> Result<Viewport>;

    /// Show a complete frame.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Block for one line typed at `(x, y)` on top of `fb`.
    ///
    /// Returns `None` when the user aborts the session.
    fn read_line(&mut self, fb: &FrameBuffer, x: u16, y: u16) -> Result<Option<String>>;

    /// Block for one acknowledgment key press.
    fn wait_key(&mut self) -> Result<()>;
}

/// Crossterm-backed console.
pub struct TerminalConsole {
    renderer: TerminalRenderer,
    echo: CellStyle,
    entered: bool,
}

impl TerminalConsole {
    pub fn new(palette: &Palette) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            echo: palette.style(StyleToken::Text),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.entered {
            self.entered = false;
            self.renderer.exit()?;
        }
        Ok(())
    }

    fn draw_echo(&mut self, frame: &mut FrameBuffer, line: &LineBuffer, x: u16, y: u16) -> Result<()> {
        frame.clear_row(y, self.echo);
        frame.put_str(x, y, &line.as_string(), self.echo);
        let cursor_x = x.saturating_add(line.len() as u16).min(frame.width().saturating_sub(1));
        self.renderer.present(frame, Some((cursor_x, y)))
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl Console for TerminalConsole {
    fn viewport(&mut self) -> Result<Viewport> {
        let (w, h) = self.renderer.size()?;
        Ok(Viewport::new(w, h))
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.renderer.present(fb, None)
    }

    fn read_line(&mut self, fb: &FrameBuffer, x: u16, y: u16) -> Result<Option<String>> {
        let mut frame = fb.clone();
        let mut line = LineBuffer::new();
        self.draw_echo(&mut frame, &line, x, y)?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    let Some(edit) = map_key(key) else {
                        continue;
                    };
                    match line.apply(edit) {
                        LineStatus::Editing => self.draw_echo(&mut frame, &line, x, y)?,
                        LineStatus::Submitted(text) => return Ok(Some(text)),
                        LineStatus::Cancelled => return Ok(None),
                    }
                }
                Event::Resize(_, _) => {
                    self.renderer.invalidate();
                    self.draw_echo(&mut frame, &line, x, y)?;
                }
                _ => {}
            }
        }
    }

    fn wait_key(&mut self) -> Result<()> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(()),
                Event::Resize(_, _) => self.renderer.invalidate(),
                _ => {}
            }
        }
    }
}

/// Console that replays queued input lines and records every frame.
///
/// Runs out of input by aborting, so a short script can never hang a loop.
/// Queued viewports are handed out one per frame; the last one sticks.
#[derive(Debug, Clone)]
pub struct ScriptedConsole {
    viewport: Viewport,
    viewports: VecDeque<Viewport>,
    lines: VecDeque<String>,
    frames: Vec<String>,
    acks: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(viewport: Viewport, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            viewport,
            viewports: VecDeque::new(),
            lines: lines.into_iter().map(Into::into).collect(),
            frames: Vec::new(),
            acks: 0,
        }
    }

    /// Report `sizes` to the next frames in order, as a terminal being
    /// resized mid-session would.
    pub fn with_viewports(mut self, sizes: impl IntoIterator<Item = Viewport>) -> Self {
        self.viewports.extend(sizes);
        self
    }

    /// Change the viewport reported from the next frame on.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewports.clear();
        self.viewport = viewport;
    }

    /// Text of every presented frame, in order.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Acknowledgment key presses consumed.
    pub fn acks(&self) -> usize {
        self.acks
    }

    /// Input lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn viewport(&mut self) -> Result<Viewport> {
        if let Some(next) = self.viewports.pop_front() {
            self.viewport = next;
        }
        Ok(self.viewport)
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.frames.push(fb.text());
        Ok(())
    }

    fn read_line(&mut self, fb: &FrameBuffer, x: u16, y: u16) -> Result<Option<String>> {
        let Some(line) = self.lines.pop_front() else {
            return Ok(None);
        };
        let mut frame = fb.clone();
        frame.put_str(x, y, &line, CellStyle::default());
        self.frames.push(frame.text());
        Ok(Some(line))
    }

    fn wait_key(&mut self) -> Result<()> {
        self.acks += 1;
        Ok(())
    }
}
