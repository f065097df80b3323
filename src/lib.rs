//! blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,input,term,types}` and
//! hosts the pieces that glue them together for the binary: command-line
//! configuration and the timed game session.

pub mod config;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::{Args, Config, ConfigError};
pub use session::{GravityTimer, Session};
