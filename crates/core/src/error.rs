//! Construction errors.
//!
//! Gameplay itself never fails; invalid moves are silent no-ops. These errors
//! only surface when building shapes or piece sources from external data.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no rows or no columns")]
    Empty,
    #[error("shape is {width}x{height}, larger than 4x4")]
    TooLarge { width: usize, height: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("shape has no occupied cell")]
    NoCells,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("piece sequence is empty")]
    EmptySequence,
    #[error("unknown piece kind {0:?}")]
    UnknownKind(String),
}
