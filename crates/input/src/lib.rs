//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameCommand`] and rate-limits
//! them with a debounce window, so rapid key repeats cannot queue up overlapping
//! moves.

pub mod debounce;
pub mod map;

pub use blockfall_types as types;

pub use debounce::InputAdapter;
pub use map::{map_key, should_quit, suppresses_default};
