//! Bridge from external move requests to the state machine.
//!
//! Resolves the request's rotation/flip against the catalog, runs the move,
//! and shapes the result into the protocol payloads.

use crate::core::board::BoardGrid;
use crate::core::game_state::{GameState, MoveError};
use crate::core::pieces::catalog;
use crate::protocol::{GameOverPayload, MoveAccepted, MoveRequest, MoveResponse};
use crate::types::{GameStatus, Rotation, BOARD_SIZE};

/// Apply a caller's move request to a game.
///
/// Rejections leave the state untouched and are returned as values; the
/// caller surfaces the reason code and keeps the session alive.
pub fn apply_move(state: &mut GameState, req: &MoveRequest) -> Result<MoveAccepted, MoveError> {
    let rotation =
        Rotation::from_degrees(req.rotation_degrees).ok_or(MoveError::InvalidOrientation)?;
    let piece = catalog().piece(req.piece_id).ok_or(MoveError::UnknownPiece)?;
    // Resolution always succeeds for a valid piece; the index is the
    // canonical orientation equal to rotate-then-flip of the base shape.
    let orientation = piece
        .resolve(rotation, req.flipped)
        .ok_or(MoveError::InvalidOrientation)?;

    let outcome = state.attempt_move(
        req.color,
        req.piece_id,
        orientation,
        (req.anchor_x, req.anchor_y),
    )?;

    let mut board: BoardGrid = [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    state.board().write_u8_grid(&mut board);

    let game_over = if state.status() == GameStatus::Finished {
        state.game_over_report().as_ref().map(GameOverPayload::from)
    } else {
        None
    };

    Ok(MoveAccepted {
        board,
        remaining: state.inventory(req.color).ids().to_vec(),
        next_turn: outcome.next_turn,
        skipped: outcome.skipped.iter().copied().collect(),
        game_over,
    })
}

/// Convenience wrapper producing the tagged wire response
pub fn handle_move(state: &mut GameState, req: &MoveRequest) -> MoveResponse {
    match apply_move(state, req) {
        Ok(accepted) => MoveResponse::Accepted(accepted),
        Err(err) => MoveResponse::Rejected(err.into()),
    }
}
