//! Scoring module - final score calculation
//!
//! Scores exist only for a finished game: each color loses one point per
//! unused square, gains a bonus for placing all 21 pieces, and a further
//! bonus when the very last piece placed was the monomino.

use arrayvec::ArrayVec;

use crate::core::inventory::Inventory;
use crate::core::pieces::catalog;
use crate::types::{Color, PieceId, ALL_PLACED_BONUS, MONOMINO_ID, MONOMINO_LAST_BONUS};

/// Final score for one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScore {
    pub color: Color,
    pub score: i32,
    pub all_placed: bool,
    pub monomino_last: bool,
}

/// Score one color from its remaining inventory and last placed piece
pub fn score_color(color: Color, inventory: Inventory, last_placed: Option<PieceId>) -> ColorScore {
    let unused_squares: i32 = inventory
        .ids()
        .iter()
        .map(|&id| catalog().piece_size(id).unwrap_or(0) as i32)
        .sum();

    let mut score = -unused_squares;
    let all_placed = inventory.is_empty();
    let monomino_last = all_placed && last_placed == Some(MONOMINO_ID);

    if all_placed {
        score += ALL_PLACED_BONUS;
        if monomino_last {
            score += MONOMINO_LAST_BONUS;
        }
    }

    ColorScore {
        color,
        score,
        all_placed,
        monomino_last,
    }
}

/// Colors sharing the highest score, in turn order
pub fn winners(scores: &[ColorScore; 4]) -> ArrayVec<Color, 4> {
    let best = scores.iter().map(|s| s.score).max().unwrap_or(0);
    scores
        .iter()
        .filter(|s| s.score == best)
        .map(|s| s.color)
        .collect()
}
