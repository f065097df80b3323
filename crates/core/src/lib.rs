//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule. It has no dependency on terminals,
//! timers or input devices, which keeps it:
//!
//! - **Deterministic**: a seeded or scripted piece source replays the same game
//! - **Testable**: every command is a direct method call
//! - **Portable**: snapshots serialize, so any renderer can draw them
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision queries and line clearing
//! - [`shape`]: the seven tetromino matrices and clockwise rotation
//! - [`piece`]: a shape anchored on the board
//! - [`source`]: where new piece kinds come from
//! - [`scoring`]: points, level-ups and gravity interval
//! - [`engine`]: the game state machine
//! - [`snapshot`]: read-only renderer view
//!
//! # Game Rules
//!
//! - **Spawn**: uniform random kind, horizontally centered on the top row
//! - **Rotation**: 90° clockwise in place; rejected if it does not fit (no kicks)
//! - **Gravity**: one row per tick; a piece that cannot fall locks immediately
//! - **Scoring**: `rows * 100 * level` per lock
//! - **Game over**: the freshly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_core::types::{GameCommand, GameStatus};
//!
//! let mut game = Engine::new(12345);
//!
//! game.apply(GameCommand::MoveRight);
//! game.apply(GameCommand::Rotate);
//! game.tick();
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Call [`Engine::tick`](engine::Engine::tick) every
//! [`Engine::tick_interval_ms`](engine::Engine::tick_interval_ms) milliseconds
//! while the game is playing, and stop calling it on game over.

pub mod board;
pub mod engine;
pub mod error;
pub mod piece;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod source;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use engine::Engine;
pub use error::{ShapeError, SourceError};
pub use piece::Piece;
pub use scoring::{line_clear_score, tick_interval_ms, GameStats, ScoreResult};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use source::{PieceSource, RandomSource, SequenceSource};
