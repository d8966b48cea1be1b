//! Board module - manages the game grid
//!
//! The board is a 20x20 grid where each cell is empty or holds the owning
//! color and piece id. Uses a flat array for cache locality.
//! Coordinates: (x, y) with x left to right and y top to bottom.
//! Occupied cells never revert to empty; there is no piece removal.

use crate::types::{Cell, CellOwner, Color, PieceId, BOARD_SIZE};

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Snapshot grid representation: 0 = empty, 1..=4 = owning color
pub type BoardGrid = [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// The game board, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells (y * SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_SIZE as usize) + (x as usize))
    }

    /// True iff 0 <= x, y < 20
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_SIZE as i8 && y >= 0 && y < BOARD_SIZE as i8
    }

    /// Get cell at position (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and occupied
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Owning color at position, if any
    pub fn color_at(&self, x: i8, y: i8) -> Option<Color> {
        self.get(x, y).flatten().map(|owner| owner.color)
    }

    /// True iff any cell on the board belongs to the color
    pub fn has_color(&self, color: Color) -> bool {
        self.cells
            .iter()
            .any(|cell| matches!(cell, Some(owner) if owner.color == color))
    }

    /// Mark each cell occupied by the given color and piece.
    ///
    /// Precondition: every cell is in bounds and empty. The placement
    /// validator must have approved the move; violating this is a
    /// programming error, not a recoverable condition.
    pub fn occupy(&mut self, cells: &[(i8, i8)], color: Color, piece: PieceId) {
        for &(x, y) in cells {
            debug_assert!(self.is_vacant(x, y), "occupy called on invalid cell ({x},{y})");
            if let Some(idx) = Self::index(x, y) {
                self.cells[idx] = Some(CellOwner { color, piece });
            }
        }
    }

    /// Write the board into a snapshot grid of color codes
    pub fn write_u8_grid(&self, out: &mut BoardGrid) {
        for y in 0..BOARD_SIZE as usize {
            for x in 0..BOARD_SIZE as usize {
                out[y][x] = match self.cells[y * BOARD_SIZE as usize + x] {
                    Some(owner) => owner.color.cell_code(),
                    None => 0,
                };
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
