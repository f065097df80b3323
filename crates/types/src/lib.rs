//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the input adapter and
//! the terminal renderer. Everything here is plain data: no I/O, no timers.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing
//!
//! Gravity is driven from outside the engine. The interval between two ticks is
//! `max(MIN_TICK_MS, BASE_TICK_MS - level * TICK_MS_PER_LEVEL)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 950ms |
//! | 2 | 900ms |
//! | 10 | 500ms |
//! | 18+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let command = GameCommand::from_str("moveLeft").unwrap();
//! assert_eq!(command, GameCommand::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval before any level reduction is applied.
pub const BASE_TICK_MS: u32 = 1000;

/// Gravity speed-up per level.
pub const TICK_MS_PER_LEVEL: u32 = 50;

/// Floor for the gravity interval.
pub const MIN_TICK_MS: u32 = 100;

/// Points per cleared row, multiplied by the level at the time of the clear.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Level-up period in cleared lines.
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh game.
pub const INITIAL_LEVEL: u32 = 1;

/// Minimum spacing between accepted movement commands.
pub const INPUT_DEBOUNCE_MS: u32 = 50;


/// The seven tetromino piece kinds
///
/// The kind doubles as the color tag of the cells a piece leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in shape-library order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Commands accepted by the engine.
///
/// Human input and any scripted driver go through the same surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; never locks
    SoftDrop,
    /// Rotate piece 90° clockwise, rejected outright if it does not fit
    Rotate,
    /// Flip between playing and paused
    TogglePause,
    /// Start over; only honored after game over
    Restart,
}

impl GameCommand {
    /// Parse a command name (case-insensitive camelCase).
    ///
    /// ```
    /// use blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("softDrop"), Some(GameCommand::SoftDrop));
    /// assert_eq!(GameCommand::from_str("togglepause"), Some(GameCommand::TogglePause));
    /// assert_eq!(GameCommand::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            "togglepause" | "pause" => Some(GameCommand::TogglePause),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Restart => "restart",
        }
    }

    /// Commands that move or turn the active piece. These are the ones that
    /// re-arm the input debounce window.
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            GameCommand::MoveLeft
                | GameCommand::MoveRight
                | GameCommand::SoftDrop
                | GameCommand::Rotate
        )
    }
}

/// Lifecycle of a game.
///
/// Playing ⇄ Paused via pause toggle; Playing → GameOver when a freshly
/// spawned piece has no room; GameOver → Playing via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Text shown in the STATUS box.
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Playing => "PLAYING",
            GameStatus::Paused => "PAUSED",
            GameStatus::GameOver => "GAME OVER",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Outcome of a single lock, kept by the engine until an observer takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    pub leveled_up: bool,
    /// The piece spawned after this lock had no room.
    pub game_over: bool,
}
