//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The screen mimics a shell session that stumbled
//! on a missing page:
//!
//! ```text
//! root@blockfall:~$ ./tetris
//! # Oops! Not found.
//! // Maybe play tetris instead?
//!
//! ┌─────────┐┌─────────┐┌─────────┐┌─────────┐
//! │SCORE    ││LEVEL    ││LINES    ││STATUS   │
//! │000200   ││2        ││2        ││PLAYING  │
//! └─────────┘└─────────┘└─────────┘└─────────┘
//!
//!             ┌────────────────────┐
//!             │    board 10x20     │
//!             └────────────────────┘
//!
//! $ Controls:
//! ...
//! ```
//!
//! When the terminal is too short for the full page, the title and the controls
//! legend are dropped and only the stats strip and the board remain.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const GREEN: Rgb = Rgb::new(34, 197, 94);
const GREEN_LIGHT: Rgb = Rgb::new(74, 222, 128);
const GRAY: Rgb = Rgb::new(107, 114, 128);
const EMPTY_BG: Rgb = Rgb::new(31, 41, 55);
const PANEL_BG: Rgb = Rgb::new(17, 24, 39);
const RED: Rgb = Rgb::new(248, 113, 113);
const YELLOW: Rgb = Rgb::new(250, 204, 21);

const STAT_BOX_W: u16 = 11;
const STAT_BOX_H: u16 = 4;
const STATS_W: u16 = STAT_BOX_W * 4 + 3;
const HEADER_H: u16 = 3;
const CONTROLS_H: u16 = 5;

const CONTROLS: [(&str, &str); 7] = [
    ("←/A/H", "Move Left"),
    ("→/D/L", "Move Right"),
    ("↓/S/J", "Move Down"),
    ("↑/W/K", "Rotate"),
    ("Space/P", "Pause"),
    ("R", "Restart"),
    ("Q/Esc", "Quit"),
];

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

/// Where each part of the page lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub left: u16,
    /// Title rows; `None` in compact mode.
    pub header_y: Option<u16>,
    pub stats_y: u16,
    pub board_x: u16,
    pub board_y: u16,
    /// Controls legend; `None` in compact mode.
    pub controls_y: Option<u16>,
}

/// A lightweight terminal renderer for the game page.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn board_frame(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = self.board_frame();
        let page_w = STATS_W.max(frame_w);
        let compact_h = STAT_BOX_H + 1 + frame_h;
        let full_h = HEADER_H + 1 + compact_h + 1 + CONTROLS_H;
        let full = viewport.height >= full_h;

        let content_h = if full { full_h } else { compact_h };
        let top = viewport.height.saturating_sub(content_h) / 2;
        let left = viewport.width.saturating_sub(page_w) / 2;

        let (header_y, stats_y) = if full {
            (Some(top), top + HEADER_H + 1)
        } else {
            (None, top)
        };
        let board_y = stats_y + STAT_BOX_H + 1;
        let controls_y = full.then_some(board_y + frame_h + 1);

        Layout {
            left,
            header_y,
            stats_y,
            board_x: left + (page_w - frame_w) / 2,
            board_y,
            controls_y,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = self.layout(viewport);
        if let Some(y) = layout.header_y {
            self.draw_header(fb, layout.left, y);
        }
        self.draw_stats(fb, snap, layout.left, layout.stats_y);
        self.draw_board(fb, snap, layout.board_x, layout.board_y);
        if let Some(y) = layout.controls_y {
            self.draw_controls(fb, layout.left, y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let prompt = Style::fg(GREEN);
        let muted = Style::fg(GRAY);
        let next = fb.put_str(x, y, "root@blockfall:~$ ", prompt);
        fb.put_str(next, y, "./tetris", muted);

        let next = fb.put_str(x, y + 1, "# ", prompt);
        fb.put_str(next, y + 1, "Oops! Not found.", Style::fg(GREEN_LIGHT).bold());

        let next = fb.put_str(x, y + 2, "// ", prompt);
        fb.put_str(next, y + 2, "Maybe play tetris instead?", muted);
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let score = format!("{:06}", snap.score);
        let level = snap.level.to_string();
        let lines = snap.lines.to_string();
        let status_color = match snap.status {
            GameStatus::Playing => GREEN_LIGHT,
            GameStatus::Paused => YELLOW,
            GameStatus::GameOver => RED,
        };

        let boxes = [
            ("SCORE", score.as_str(), GREEN_LIGHT),
            ("LEVEL", level.as_str(), GREEN_LIGHT),
            ("LINES", lines.as_str(), GREEN_LIGHT),
            ("STATUS", snap.status.label(), status_color),
        ];
        for (i, (label, value, color)) in boxes.into_iter().enumerate() {
            let bx = x + i as u16 * (STAT_BOX_W + 1);
            let border = Style::fg(GREEN).on(PANEL_BG);
            fb.fill_rect(bx, y, STAT_BOX_W, STAT_BOX_H, ' ', Style::fg(GRAY).on(PANEL_BG));
            fb.draw_box(bx, y, STAT_BOX_W, STAT_BOX_H, border);
            fb.put_str(bx + 1, y + 1, label, Style::fg(GRAY).on(PANEL_BG));
            fb.put_str(bx + 1, y + 2, value, Style::fg(color).on(PANEL_BG).bold());
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let (frame_w, frame_h) = self.board_frame();
        fb.draw_box(x, y, frame_w, frame_h, Style::fg(GREEN).on(PANEL_BG));

        let active_cells = snap.active.map(|a| {
            let mut mask = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
            for (dx, dy) in a.shape.cells() {
                let (cx, cy) = (a.x as i16 + dx as i16, a.y as i16 + dy as i16);
                if (0..BOARD_WIDTH as i16).contains(&cx) && (0..BOARD_HEIGHT as i16).contains(&cy) {
                    mask[cy as usize][cx as usize] = true;
                }
            }
            mask
        });

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let is_active = active_cells.is_some_and(|m| m[row][col]);
                let glyph = match cell {
                    Some(kind) => Glyph::new('█', cell_style(*kind, is_active)),
                    None => Glyph::new(' ', Style::fg(GRAY).on(EMPTY_BG)),
                };
                fb.fill_rect(
                    x + 1 + col as u16 * self.cell_w,
                    y + 1 + row as u16 * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    glyph.ch,
                    glyph.style,
                );
            }
        }

        match snap.status {
            GameStatus::Playing => {}
            GameStatus::Paused => self.draw_overlay(fb, x, y, frame_w, frame_h, &["PAUSED"], YELLOW),
            GameStatus::GameOver => self.draw_overlay(
                fb,
                x,
                y,
                frame_w,
                frame_h,
                &["GAME OVER", "R to restart"],
                RED,
            ),
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
        color: Rgb,
    ) {
        let style = Style::fg(color).on(Rgb::new(0, 0, 0)).bold();
        let mid = y + frame_h / 2 - lines.len() as u16 / 2;
        for (i, text) in lines.iter().enumerate() {
            let w = text.chars().count() as u16;
            fb.put_str(x + frame_w.saturating_sub(w) / 2, mid + i as u16, text, style);
        }
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let key = Style::fg(GREEN);
        let text = Style::fg(GRAY);
        let next = fb.put_str(x, y, "$ ", key);
        fb.put_str(next, y, "Controls:", Style::fg(GREEN_LIGHT));

        let col_w = STATS_W / 2;
        for (i, (keys, action)) in CONTROLS.iter().enumerate() {
            let cx = x + (i as u16 % 2) * col_w;
            let cy = y + 1 + i as u16 / 2;
            let next = fb.put_str(cx, cy, keys, key);
            fb.put_str(next + 1, cy, action, text);
        }
    }
}

/// Locked cells use the page's green; the falling piece is drawn brighter.
fn cell_style(_kind: PieceKind, active: bool) -> Style {
    if active {
        Style::fg(GREEN_LIGHT).on(EMPTY_BG).bold()
    } else {
        Style::fg(GREEN).on(EMPTY_BG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_layout_stacks_sections() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(47, 37));
        assert_eq!(layout.header_y, Some(0));
        assert_eq!(layout.stats_y, 4);
        assert_eq!(layout.board_y, 9);
        assert_eq!(layout.board_x, 12);
        assert_eq!(layout.controls_y, Some(32));
    }

    #[test]
    fn short_terminal_uses_compact_layout() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(80, 27));
        assert_eq!(layout.header_y, None);
        assert_eq!(layout.controls_y, None);
        assert_eq!(layout.stats_y, 0);
        assert_eq!(layout.board_y, 5);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
