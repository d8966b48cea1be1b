use arrayvec::ArrayVec;

use crate::types::{Color, GameStatus, PieceId, BOARD_SIZE, PIECE_COUNT};

pub use crate::core::board::BoardGrid;

/// Read-only view of a committed game state, for rendering and broadcast.
///
/// The grid carries only owning colors; piece boundaries inside a color's
/// region are not reconstructed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub status: GameStatus,
    /// Color to move; None once finished
    pub current_turn: Option<Color>,
    /// Unused piece ids per color, indexed by turn order
    pub remaining: [ArrayVec<PieceId, { PIECE_COUNT as usize }>; 4],
    /// Number of committed moves
    pub move_count: u32,
}

impl GameSnapshot {
    pub fn in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Remaining piece ids for one color
    pub fn remaining_for(&self, color: Color) -> &[PieceId] {
        &self.remaining[color.index()]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            status: GameStatus::InProgress,
            current_turn: Some(Color::Blue),
            remaining: Default::default(),
            move_count: 0,
        }
    }
}
