//! The falling piece: a shape anchored on the board.

use serde::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_WIDTH};

/// Active falling piece
///
/// `(x, y)` is the board position of the shape's top-left corner. `y` may be
/// negative while part of the piece is still above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position: horizontally centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }

    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            x,
            y,
        }
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape.cells().map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Color tag written into the board on lock.
    pub fn color(&self) -> PieceKind {
        self.kind
    }
}
