//! Placement validator - the single canonical legality check
//!
//! Pure function over a board snapshot; every caller (move commit, UI
//! preview, bot search, turn manager) goes through this one implementation.
//! Rules are evaluated in a fixed order and the first violation wins.

use crate::core::board::Board;
use crate::types::{Color, BOARD_SIZE};

/// Orthogonal neighbor offsets (edge contact)
const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Diagonal neighbor offsets (corner contact)
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Reasons a placement is illegal, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementError {
    OutOfBounds,
    CellOccupied,
    MissingCornerAnchor,
    SameColorEdgeContact,
    NoCornerContact,
}

impl PlacementError {
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::OutOfBounds => "out_of_bounds",
            PlacementError::CellOccupied => "cell_occupied",
            PlacementError::MissingCornerAnchor => "missing_corner_anchor",
            PlacementError::SameColorEdgeContact => "same_color_edge_contact",
            PlacementError::NoCornerContact => "no_corner_contact",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlacementError::OutOfBounds => "piece extends outside the board",
            PlacementError::CellOccupied => "piece overlaps an occupied cell",
            PlacementError::MissingCornerAnchor => {
                "first piece must cover the color's starting corner"
            }
            PlacementError::SameColorEdgeContact => {
                "piece touches a same-color piece along an edge"
            }
            PlacementError::NoCornerContact => {
                "piece must touch a same-color piece at a corner"
            }
        }
    }
}

/// Check whether a shape placed at `anchor` is legal for `color`.
///
/// `shape` is a normalized orientation from the catalog; its cells land at
/// `anchor + offset`. `first_move` must be true iff the board holds no cell
/// of this color yet. Read-only: safe to call concurrently and repeatedly
/// against a committed board.
pub fn validate_placement(
    board: &Board,
    shape: &[(i8, i8)],
    anchor: (i8, i8),
    color: Color,
    first_move: bool,
) -> Result<(), PlacementError> {
    let (ax, ay) = anchor;

    // Widened arithmetic: an anchor near the i8 limits must reject as
    // out of bounds, not wrap. Once this loop passes, every cell sum fits
    // in i8 and the remaining checks can add natively.
    const SIZE: i16 = BOARD_SIZE as i16;
    for &(dx, dy) in shape {
        let x = i16::from(ax) + i16::from(dx);
        let y = i16::from(ay) + i16::from(dy);
        if !(0..SIZE).contains(&x) || !(0..SIZE).contains(&y) {
            return Err(PlacementError::OutOfBounds);
        }
    }

    for &(dx, dy) in shape {
        if board.is_occupied(ax + dx, ay + dy) {
            return Err(PlacementError::CellOccupied);
        }
    }

    if first_move {
        // Adjacency rules do not apply to the first move; the only extra
        // requirement is covering the assigned corner.
        let corner = color.home_corner();
        let covers_corner = shape.iter().any(|&(dx, dy)| (ax + dx, ay + dy) == corner);
        if !covers_corner {
            return Err(PlacementError::MissingCornerAnchor);
        }
        return Ok(());
    }

    // Edge contact with own color is absolute: one hit rejects the whole
    // placement regardless of any corner contacts.
    for &(dx, dy) in shape {
        for &(nx, ny) in &ORTHOGONAL {
            if board.color_at(ax + dx + nx, ay + dy + ny) == Some(color) {
                return Err(PlacementError::SameColorEdgeContact);
            }
        }
    }

    let corner_contact = shape.iter().any(|&(dx, dy)| {
        DIAGONAL
            .iter()
            .any(|&(nx, ny)| board.color_at(ax + dx + nx, ay + dy + ny) == Some(color))
    });
    if !corner_contact {
        return Err(PlacementError::NoCornerContact);
    }

    Ok(())
}
