//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that filled it. Cells live in a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by a single clear, bottom row first.
pub type ClearedRows = ArrayVec<u8, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x as i16, y as i16).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x as i16, y as i16) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Fill a whole row with one kind; handy for building positions.
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|c| c.is_some())
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|c| c.is_none())
    }

    /// Whether `piece`, moved by `(dx, dy)` and optionally given another
    /// shape, fits on the board.
    ///
    /// Every occupied cell must satisfy `0 <= x < width` and `y < height`.
    /// Only cells with `y >= 0` are checked against the stack, so a piece may
    /// hang above the top edge.
    pub fn can_place(&self, piece: &Piece, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        let shape = shape.unwrap_or(&piece.shape);
        let ox = piece.x as i16 + dx as i16;
        let oy = piece.y as i16 + dy as i16;

        shape.cells().all(|(cx, cy)| {
            let x = ox + cx as i16;
            let y = oy + cy as i16;
            if x < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
                return false;
            }
            y < 0 || Self::index(x, y).is_some_and(|idx| self.cells[idx].is_none())
        })
    }

    /// Write the piece's visible cells into the board.
    ///
    /// Cells above the top edge are dropped. Returns how many cells were written.
    pub fn lock(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if y >= 0 && self.set(x, y, Some(piece.color())) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row, shifting the rows above down and filling the top
    /// with empty rows. Returns the removed row indices, bottom to top.
    ///
    /// Rows are compacted in a single bottom-up pass, which yields the same
    /// board as removing one full row at a time and re-scanning its index.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y as u8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                }
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, bottom-aligned: `#` (or any piece
    /// letter) is filled, `.` is empty. Missing top rows are empty.
    ///
    /// ```
    /// use blockfall_core::Board;
    ///
    /// let board = Board::from_ascii(&["#########."]);
    /// assert!(board.is_occupied(0, 19));
    /// assert!(!board.is_occupied(9, 19));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let top = HEIGHT.saturating_sub(rows.len());
        for (i, row) in rows.iter().rev().take(HEIGHT).rev().enumerate() {
            let y = (top + i) as i8;
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    '#' => Some(PieceKind::I),
                    other => PieceKind::from_str(&other.to_string()).or(Some(PieceKind::I)),
                };
                board.set(x as i8, y, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
