//! Scoring module - line-clear points, leveling, and gravity speed
//!
//! Rules:
//! - A lock clearing `n` rows at level `L` scores `n * 100 * L`, using the
//!   level from before the clear.
//! - The level goes up by one when the line total *before* the clear is a
//!   multiple of ten. Since a fresh game has zero lines, the very first clear
//!   always levels up.
//! - Gravity interval is `max(100, 1000 - level * 50)` milliseconds.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_TICK_MS, INITIAL_LEVEL, LINES_PER_LEVEL, LINE_CLEAR_POINTS, MIN_TICK_MS,
    TICK_MS_PER_LEVEL,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub score_gained: u32,
    pub leveled_up: bool,
}

/// Points for clearing `lines` rows at `level`.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_POINTS).saturating_mul(level)
}

/// Whether a clear levels up, judged on the line total before the clear.
pub fn levels_up(previous_lines: u32, cleared: u32) -> bool {
    cleared > 0 && previous_lines % LINES_PER_LEVEL == 0
}

/// Gravity interval for a level, in milliseconds.
///
/// ```
/// use blockfall_core::scoring::tick_interval_ms;
///
/// assert_eq!(tick_interval_ms(1), 950);
/// assert_eq!(tick_interval_ms(10), 500);
/// assert_eq!(tick_interval_ms(40), 100);
/// ```
pub fn tick_interval_ms(level: u32) -> u32 {
    BASE_TICK_MS
        .saturating_sub(level.saturating_mul(TICK_MS_PER_LEVEL))
        .max(MIN_TICK_MS)
}

/// Score, level and line total of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: INITIAL_LEVEL,
            lines: 0,
        }
    }

    /// Apply the outcome of one lock that cleared `cleared` rows.
    pub fn record_clear(&mut self, cleared: u32) -> ScoreResult {
        if cleared == 0 {
            return ScoreResult::default();
        }

        let previous_lines = self.lines;
        let score_gained = line_clear_score(cleared, self.level);
        let leveled_up = levels_up(previous_lines, cleared);

        self.lines = self.lines.saturating_add(cleared);
        self.score = self.score.saturating_add(score_gained);
        if leveled_up {
            self.level = self.level.saturating_add(1);
        }

        ScoreResult {
            score_gained,
            leveled_up,
        }
    }

    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.level)
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}
