//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game_state;
pub mod inventory;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod validator;

// Re-export commonly used types
pub use board::{Board, BoardGrid};
pub use game_state::{GameOverReport, GameState, MoveError, MoveOutcome, MoveRecord};
pub use inventory::Inventory;
pub use pieces::{catalog, PieceCatalog, PieceShapes, ShapeCells};
pub use scoring::{score_color, winners, ColorScore};
pub use snapshot::GameSnapshot;
pub use validator::{validate_placement, PlacementError};
