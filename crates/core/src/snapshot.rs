use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view handed to renderers.
///
/// `board` already contains the active piece's visible cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: GameStatus,
    pub tick_interval_ms: u32,
    pub episode_id: u32,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    pub fn playable(&self) -> bool {
        self.status.is_playing()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            level: INITIAL_LEVEL,
            lines: 0,
            status: GameStatus::Playing,
            tick_interval_ms: 0,
            episode_id: 0,
            revision: 0,
        }
    }
}
