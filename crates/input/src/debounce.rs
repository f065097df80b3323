//! Debounced input adapter.
//!
//! Every key goes through one gate: anything arriving sooner than the debounce
//! window after the last accepted movement or rotation is dropped. Only
//! movement and rotation re-arm the window, so pause and restart never delay
//! the next move.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use crate::map::map_key;
use crate::types::{GameCommand, INPUT_DEBOUNCE_MS};

#[derive(Debug, Clone)]
pub struct InputAdapter {
    window: Duration,
    last_move: Option<Instant>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(INPUT_DEBOUNCE_MS as u64))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            last_move: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Map and filter a key press observed at `now`.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<GameCommand> {
        map_key(key).and_then(|command| self.accept(command, now))
    }

    /// Pass `command` through the debounce gate.
    pub fn accept(&mut self, command: GameCommand, now: Instant) -> Option<GameCommand> {
        if let Some(last) = self.last_move {
            if now.saturating_duration_since(last) < self.window {
                return None;
            }
        }
        if command.is_movement() {
            self.last_move = Some(now);
        }
        Some(command)
    }

    /// Forget the last accepted move.
    pub fn reset(&mut self) {
        self.last_move = None;
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new()
    }
}
