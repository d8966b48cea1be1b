//! Protocol module - payload types exchanged with external collaborators
//!
//! The engine defines no transport; these are the serde-serializable shapes
//! a UI, bot, or network layer sends and receives. Board grids use small
//! integers: 0 = empty, 1..=4 = owning color in turn order.

use serde::{Deserialize, Serialize};

use crate::core::board::BoardGrid;
use crate::core::game_state::{GameOverReport, MoveError};
use crate::types::{Color, PieceId};

/// A move as requested by a caller. Orientation is expressed as rotation
/// degrees plus an optional flip and resolved against the catalog's
/// canonical orientation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub color: Color,
    pub piece_id: PieceId,
    pub anchor_x: i8,
    pub anchor_y: i8,
    /// One of 0, 90, 180, 270
    pub rotation_degrees: u16,
    pub flipped: bool,
}

/// Success payload for a committed move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAccepted {
    pub board: BoardGrid,
    /// Mover's remaining piece ids
    pub remaining: Vec<PieceId>,
    /// Color now to move; None when the game just finished
    pub next_turn: Option<Color>,
    /// Colors skipped during turn advancement (still holding pieces)
    pub skipped: Vec<Color>,
    /// Present exactly when the move ended the game
    pub game_over: Option<GameOverPayload>,
}

/// Rejection payload carrying exactly one reason code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRejected {
    pub reason: String,
    pub message: String,
}

impl From<MoveError> for MoveRejected {
    fn from(err: MoveError) -> Self {
        Self {
            reason: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Game-over notification: winners and per-color final scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverPayload {
    pub winners: Vec<Color>,
    pub scores: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub color: Color,
    pub score: i32,
    pub all_placed: bool,
    pub monomino_last: bool,
}

impl From<&GameOverReport> for GameOverPayload {
    fn from(report: &GameOverReport) -> Self {
        Self {
            winners: report.winners.iter().copied().collect(),
            scores: report
                .scores
                .iter()
                .map(|s| ScoreEntry {
                    color: s.color,
                    score: s.score,
                    all_placed: s.all_placed,
                    monomino_last: s.monomino_last,
                })
                .collect(),
        }
    }
}

/// Either outcome of a move request, tagged for wire use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveResponse {
    Accepted(MoveAccepted),
    Rejected(MoveRejected),
}
