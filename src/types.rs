//! Core types shared across the engine
//! This module contains pure data types with no game logic

use serde::{Deserialize, Serialize};

/// Board side length (the board is square)
pub const BOARD_SIZE: u8 = 20;

/// Number of pieces per color
pub const PIECE_COUNT: u8 = 21;

/// Piece id of the single-square piece
pub const MONOMINO_ID: PieceId = 1;

/// Bonus for placing all 21 pieces
pub const ALL_PLACED_BONUS: i32 = 15;

/// Extra bonus when the last piece placed was the monomino
pub const MONOMINO_LAST_BONUS: i32 = 5;

/// Stable piece identifier, 1..=21
pub type PieceId = u8;

/// Player colors, declared in turn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Yellow,
    Green,
    Red,
}

impl Color {
    /// All colors in turn order
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Green, Color::Red];

    /// Turn-order index (0..4)
    pub fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Red => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Color::ALL.get(index).copied()
    }

    /// Next color in cyclic turn order
    pub fn next(self) -> Self {
        Color::ALL[(self.index() + 1) % 4]
    }

    /// The starting corner assigned to this color.
    ///
    /// Fixed configuration: Blue top-left, Yellow top-right,
    /// Red bottom-left, Green bottom-right.
    pub fn home_corner(self) -> (i8, i8) {
        let max = (BOARD_SIZE - 1) as i8;
        match self {
            Color::Blue => (0, 0),
            Color::Yellow => (max, 0),
            Color::Red => (0, max),
            Color::Green => (max, max),
        }
    }

    /// Cell code used in board snapshots (1..=4, 0 means empty)
    pub fn cell_code(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "red" => Some(Color::Red),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Red => "red",
        }
    }
}

/// Quarter-turn rotations, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Number of quarter turns (0..4)
    pub fn quarter_turns(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Parse from degrees; only 0/90/180/270 are valid
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::R0),
            90 => Some(Rotation::R90),
            180 => Some(Rotation::R180),
            270 => Some(Rotation::R270),
            _ => None,
        }
    }
}

/// Occupant of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellOwner {
    pub color: Color,
    pub piece: PieceId,
}

/// Cell on the board (None = empty, Some = occupied)
pub type Cell = Option<CellOwner>;

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Finished,
}
