//! Inventory module - per-color set of unused piece ids
//!
//! Backed by a bitmask; a piece id leaves the set exactly once, the moment
//! its placement is committed, and never returns.

use arrayvec::ArrayVec;

use crate::types::{PieceId, PIECE_COUNT};

/// Unused piece ids for one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inventory(u32);

impl Inventory {
    const FULL: u32 = (1 << PIECE_COUNT) - 1;

    /// All 21 pieces available
    pub fn full() -> Self {
        Self(Self::FULL)
    }

    pub fn contains(self, id: PieceId) -> bool {
        id >= 1 && id <= PIECE_COUNT && self.0 & (1 << (id - 1)) != 0
    }

    /// Remove a piece id; false if it was not present
    pub fn take(&mut self, id: PieceId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.0 &= !(1 << (id - 1));
        true
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of pieces still unused
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Remaining piece ids in ascending order
    pub fn ids(self) -> ArrayVec<PieceId, { PIECE_COUNT as usize }> {
        (1..=PIECE_COUNT).filter(|&id| self.contains(id)).collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::full()
    }
}
