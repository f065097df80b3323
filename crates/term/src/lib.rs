//! Terminal rendering for the game page.
//!
//! Snapshots from `core` are laid out into a [`FrameBuffer`] by [`GameView`]
//! (pure, testable), then flushed by [`TerminalRenderer`], which only rewrites
//! the glyphs that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{changed_runs, encode_frame, Run, TerminalRenderer};
