//! Placement validator tests - rule ordering and adjacency classification

use blokus_engine::core::pieces::catalog;
use blokus_engine::core::{validate_placement, Board, PlacementError};
use blokus_engine::types::Color;

fn shape(piece_id: u8, orientation: usize) -> Vec<(i8, i8)> {
    catalog().shapes_for(piece_id).unwrap()[orientation].to_vec()
}

#[test]
fn test_first_move_succeeds_only_on_home_corner() {
    let board = Board::new();
    for color in Color::ALL {
        let corner = color.home_corner();
        assert_eq!(
            validate_placement(&board, &shape(1, 0), corner, color, true),
            Ok(()),
            "{} corner", color.as_str()
        );
        assert_eq!(
            validate_placement(&board, &shape(1, 0), (10, 10), color, true),
            Err(PlacementError::MissingCornerAnchor)
        );
    }
}

#[test]
fn test_first_move_any_covering_cell_counts() {
    let board = Board::new();
    // Horizontal domino anchored at (18, 0): its second cell covers
    // Yellow's corner (19, 0).
    let horizontal: Vec<(i8, i8)> = vec![(0, 0), (1, 0)];
    assert_eq!(
        validate_placement(&board, &horizontal, (18, 0), Color::Yellow, true),
        Ok(())
    );
}

#[test]
fn test_first_move_skips_adjacency_rules() {
    let mut board = Board::new();
    // Red cells packed near Blue's corner do not block Blue's first move.
    board.occupy(&[(1, 0), (0, 1)], Color::Red, 2);
    assert_eq!(
        validate_placement(&board, &shape(1, 0), (0, 0), Color::Blue, true),
        Ok(())
    );
}

#[test]
fn test_bounds_beat_all_other_rules() {
    let board = Board::new();
    // I pentomino hanging off the bottom edge from Blue's corner.
    let vertical = shape(10, 0);
    assert_eq!(
        validate_placement(&board, &vertical, (0, 16), Color::Blue, true),
        Err(PlacementError::OutOfBounds)
    );
}

#[test]
fn test_overlap_rejected_for_any_color() {
    let mut board = Board::new();
    board.occupy(&[(0, 0)], Color::Blue, 1);
    for color in Color::ALL {
        assert_eq!(
            validate_placement(&board, &shape(1, 0), (0, 0), color, color != Color::Blue),
            Err(PlacementError::CellOccupied)
        );
    }
}

#[test]
fn test_edge_contact_absolute_even_with_corner_contact() {
    let mut board = Board::new();
    board.occupy(&[(0, 0)], Color::Blue, 1);
    // Vertical domino at (1, 1): diagonal contact with (0, 0) at its top
    // cell is fine. Extending to (0, 1) instead touches (0, 0) on an edge
    // and is rejected despite the diagonal contact from (1, 2).
    let vertical: Vec<(i8, i8)> = vec![(0, 0), (0, 1)];
    assert_eq!(
        validate_placement(&board, &vertical, (1, 1), Color::Blue, false),
        Ok(())
    );
    assert_eq!(
        validate_placement(&board, &vertical, (0, 1), Color::Blue, false),
        Err(PlacementError::SameColorEdgeContact)
    );
}

#[test]
fn test_isolated_placement_needs_corner_contact() {
    let mut board = Board::new();
    board.occupy(&[(0, 0)], Color::Blue, 1);
    assert_eq!(
        validate_placement(&board, &shape(2, 0), (5, 5), Color::Blue, false),
        Err(PlacementError::NoCornerContact)
    );
}

#[test]
fn test_opposing_color_edge_contact_allowed() {
    let mut board = Board::new();
    board.occupy(&[(0, 0)], Color::Blue, 1);
    board.occupy(&[(1, 2)], Color::Red, 1);
    // Blue at (1, 1): diagonal to own (0, 0), edge contact with red (1, 2).
    assert_eq!(
        validate_placement(&board, &shape(1, 0), (1, 1), Color::Blue, false),
        Ok(())
    );
}

#[test]
fn test_validator_is_pure() {
    let mut board = Board::new();
    board.occupy(&[(0, 0)], Color::Blue, 1);
    let before = board.clone();

    // Repeated evaluation (legal and illegal) never touches the board.
    for _ in 0..3 {
        let _ = validate_placement(&board, &shape(1, 0), (1, 1), Color::Blue, false);
        let _ = validate_placement(&board, &shape(1, 0), (0, 1), Color::Blue, false);
    }
    assert_eq!(board, before);
}
