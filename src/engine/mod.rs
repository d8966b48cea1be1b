//! Engine module - request-to-state bridge for external callers

pub mod place;

pub use place::{apply_move, handle_move};
