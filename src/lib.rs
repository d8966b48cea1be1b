//! Blokus placement rule engine and game-state machine.
//!
//! Pure, synchronous game logic: piece geometry with 8-fold symmetry
//! canonicalization, board occupancy, placement legality, turn sequencing,
//! and terminal scoring. UI, transport, and persistence layers call into
//! this crate and render its results; the engine itself defines no file
//! format, CLI, or network protocol.
//!
//! One [`core::GameState`] value per game session, mutated only through
//! [`core::GameState::attempt_move`] (or the request bridge in
//! [`engine::place`]). The piece catalog is built once per process and
//! shared read-only across games.

pub mod core;
pub mod engine;
pub mod protocol;
pub mod types;

pub use crate::core::{GameState, MoveError};
pub use crate::protocol::{MoveRequest, MoveResponse};
pub use crate::types::{Color, GameStatus, PieceId};
