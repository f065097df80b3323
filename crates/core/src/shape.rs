//! Shape module - tetromino matrices and clockwise rotation
//!
//! A shape is a small boolean matrix (at most 4x4) stored inline so pieces stay
//! `Copy` and rotation never allocates. Row 0 is the top row of the shape.

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::types::PieceKind;

/// Largest side length of any shape in the library.
pub const MAX_SHAPE_SIDE: usize = 4;

/// A rectangular occupancy matrix.
///
/// Serialized as nested rows of `0`/`1`, e.g. `[[1,1],[1,1]]` for the O piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct Shape {
    width: u8,
    height: u8,
    /// `bits[row][col]`; everything outside `height x width` stays `false`.
    bits: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

const fn matrix<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Shape {
    let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
    let mut r = 0;
    while r < H {
        let mut c = 0;
        while c < W {
            bits[r][c] = rows[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape {
        width: W as u8,
        height: H as u8,
        bits,
    }
}

/// The fixed library, indexed by [`PieceKind::index`].
const LIBRARY: [Shape; 7] = [
    matrix([[1, 1, 1, 1]]),
    matrix([[1, 1], [1, 1]]),
    matrix([[1, 1, 1], [0, 1, 0]]),
    matrix([[1, 1, 1], [1, 0, 0]]),
    matrix([[1, 1, 1], [0, 0, 1]]),
    matrix([[1, 1, 0], [0, 1, 1]]),
    matrix([[0, 1, 1], [1, 1, 0]]),
];

impl Shape {
    /// Spawn orientation of a piece kind.
    pub fn of(kind: PieceKind) -> Self {
        LIBRARY[kind.index()]
    }

    /// Build a shape from explicit rows (non-zero means occupied).
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let bar = Shape::from_rows(&[[1u8, 1, 1, 1]]).unwrap();
    /// assert_eq!(bar.width(), 4);
    /// assert!(Shape::from_rows(&[&[1u8, 1][..], &[1u8][..]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return Err(ShapeError::TooLarge { width, height });
        }

        let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut any = false;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ShapeError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
                any |= v != 0;
            }
        }
        if !any {
            return Err(ShapeError::NoCells);
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            bits,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether `(col, row)` is occupied. Out-of-range positions are empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.width as usize && row < self.height as usize && self.bits[row][col]
    }

    /// Occupied cells as `(col, row)` offsets from the top-left anchor.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let shape = *self;
        (0..shape.height as usize).flat_map(move |r| {
            (0..shape.width as usize)
                .filter(move |&c| shape.bits[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// 90° clockwise rotation: each column, read bottom to top, becomes a row.
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[[1u8, 1, 1], [0, 1, 0]]).unwrap();
    /// let r = t.rotated_cw();
    /// assert_eq!(r.to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    /// ```
    pub fn rotated_cw(&self) -> Self {
        let h = self.height as usize;
        let w = self.width as usize;
        let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in bits.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.bits[h - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            bits,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|r| {
                (0..self.width as usize)
                    .map(|c| u8::from(self.bits[r][c]))
                    .collect()
            })
            .collect()
    }
}

impl From<Shape> for Vec<Vec<u8>> {
    fn from(shape: Shape) -> Self {
        shape.to_rows()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Shape {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Shape::from_rows(&rows)
    }
}
