//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is drawn in full; later frames only rewrite the runs of glyphs that changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use log::debug;

use crate::fb::{FrameBuffer, Rgb, Style};

/// A horizontal stretch of changed glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, diffing against the previously drawn frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(last) if last.width() == fb.width() && last.height() == fb.height() => {
                last.clone_from(fb);
            }
            slot => {
                debug!("full redraw at {}x{}", fb.width(), fb.height());
                *slot = Some(fb.clone());
            }
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without a comparable previous frame the whole screen is cleared and redrawn.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let runs = match prev {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            changed_runs(prev, next)
        }
        _ => {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            (0..next.height())
                .map(|y| Run {
                    x: 0,
                    y,
                    len: next.width(),
                })
                .collect()
        }
    };

    let mut current: Option<Style> = None;
    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            let glyph = next.get(x, run.y).unwrap_or_default();
            if current != Some(glyph.style) {
                apply_style(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Runs of glyphs that differ between two equally sized frames, row by row.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let differs = prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run {
                x: s,
                y,
                len: next.width() - s,
            });
        }
    }
    runs
}

fn apply_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Glyph;

    #[test]
    fn changed_runs_coalesce_adjacent_glyphs() {
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);
        for x in 1..=3 {
            b.set(x, 0, Glyph::new('X', Style::default()));
        }
        b.set(4, 1, Glyph::new('Y', Style::default()));

        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 4, y: 1, len: 1 }]
        );
    }

    #[test]
    fn identical_frames_encode_no_glyphs() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_frame(Some(&a), &a.clone(), &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains(' '));
    }

    #[test]
    fn full_redraw_prints_every_glyph() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", Style::default());
        let mut out = Vec::new();
        encode_frame(None, &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abc"));
    }

    #[test]
    fn colors_map_to_rgb() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
