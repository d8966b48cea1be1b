//! Pieces module - the 21 polyomino shapes and their orientation sets
//!
//! Base shapes are normalized so min x and min y are both 0. Orientations
//! are generated as rotate (0/90/180/270 CW) then optional mirror, then
//! re-normalized; duplicates from symmetric pieces are dropped by structural
//! equality, keeping first-occurrence order.

use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::types::{PieceId, Rotation, PIECE_COUNT};

/// Maximum cells in a piece
pub const MAX_PIECE_CELLS: usize = 5;

/// A piece shape as relative cell offsets from its origin, sorted
pub type ShapeCells = ArrayVec<(i8, i8), MAX_PIECE_CELLS>;

/// Base shapes, indexed by piece id - 1.
///
/// Sizes: 1 monomino, 1 domino, 2 trominoes, 5 tetrominoes, 12 pentominoes.
const BASE_SHAPES: [&[(i8, i8)]; PIECE_COUNT as usize] = [
    // 1: monomino
    &[(0, 0)],
    // 2: domino
    &[(0, 0), (0, 1)],
    // 3: I tromino
    &[(0, 0), (0, 1), (0, 2)],
    // 4: L tromino
    &[(0, 0), (0, 1), (1, 1)],
    // 5: I tetromino
    &[(0, 0), (0, 1), (0, 2), (0, 3)],
    // 6: L tetromino
    &[(1, 0), (1, 1), (0, 2), (1, 2)],
    // 7: T tetromino
    &[(0, 0), (0, 1), (1, 1), (0, 2)],
    // 8: O tetromino
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    // 9: S tetromino
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    // 10: I pentomino
    &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    // 11: L pentomino
    &[(1, 0), (1, 1), (1, 2), (0, 3), (1, 3)],
    // 12: N pentomino
    &[(1, 0), (1, 1), (0, 2), (1, 2), (0, 3)],
    // 13: P pentomino
    &[(1, 0), (0, 1), (1, 1), (0, 2), (1, 2)],
    // 14: U pentomino
    &[(0, 0), (1, 0), (1, 1), (0, 2), (1, 2)],
    // 15: Y pentomino
    &[(0, 0), (0, 1), (1, 1), (0, 2), (0, 3)],
    // 16: T pentomino
    &[(1, 0), (1, 1), (0, 2), (1, 2), (2, 2)],
    // 17: V pentomino
    &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
    // 18: W pentomino
    &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
    // 19: Z pentomino
    &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
    // 20: F pentomino
    &[(0, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    // 21: X pentomino
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
];

/// Translate to origin and sort, so structurally equal shapes compare equal
fn normalize(mut cells: ShapeCells) -> ShapeCells {
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
    for (x, y) in cells.iter_mut() {
        *x -= min_x;
        *y -= min_y;
    }
    cells.sort_unstable();
    cells
}

/// Rotate 90 degrees clockwise, re-normalized
pub fn rotate_cw(cells: &ShapeCells) -> ShapeCells {
    normalize(cells.iter().map(|&(x, y)| (-y, x)).collect())
}

/// Mirror horizontally, re-normalized
pub fn mirror(cells: &ShapeCells) -> ShapeCells {
    normalize(cells.iter().map(|&(x, y)| (-x, y)).collect())
}

/// Apply rotation then optional reflection to a base shape
pub fn transform(base: &ShapeCells, rotation: Rotation, flipped: bool) -> ShapeCells {
    let mut shape = normalize(base.clone());
    for _ in 0..rotation.quarter_turns() {
        shape = rotate_cw(&shape);
    }
    if flipped {
        shape = mirror(&shape);
    }
    shape
}

/// One piece with its symmetry-reduced orientation set
#[derive(Debug, Clone)]
pub struct PieceShapes {
    pub id: PieceId,
    /// Cell count (1..=5)
    pub size: u8,
    /// Distinct orientations in generation order
    orientations: Vec<ShapeCells>,
}

impl PieceShapes {
    fn build(id: PieceId) -> Self {
        let base: ShapeCells = BASE_SHAPES[id as usize - 1].iter().copied().collect();
        let mut orientations: Vec<ShapeCells> = Vec::with_capacity(8);

        for flipped in [false, true] {
            for rotation in Rotation::ALL {
                let shape = transform(&base, rotation, flipped);
                if !orientations.contains(&shape) {
                    orientations.push(shape);
                }
            }
        }

        Self {
            id,
            size: base.len() as u8,
            orientations,
        }
    }

    pub fn orientations(&self) -> &[ShapeCells] {
        &self.orientations
    }

    pub fn orientation(&self, index: usize) -> Option<&ShapeCells> {
        self.orientations.get(index)
    }

    /// Orientation index matching a rotation/flip request, by structural
    /// equality against the canonical set. Always resolves for a valid piece.
    pub fn resolve(&self, rotation: Rotation, flipped: bool) -> Option<usize> {
        let base: ShapeCells = BASE_SHAPES[self.id as usize - 1].iter().copied().collect();
        let target = transform(&base, rotation, flipped);
        self.orientations.iter().position(|s| *s == target)
    }
}

/// Immutable catalog of all 21 pieces
#[derive(Debug, Clone)]
pub struct PieceCatalog {
    pieces: Vec<PieceShapes>,
}

impl PieceCatalog {
    fn build() -> Self {
        Self {
            pieces: (1..=PIECE_COUNT).map(PieceShapes::build).collect(),
        }
    }

    /// Look up a piece by id; None for ids outside 1..=21
    pub fn piece(&self, id: PieceId) -> Option<&PieceShapes> {
        if id == 0 || id > PIECE_COUNT {
            return None;
        }
        self.pieces.get(id as usize - 1)
    }

    /// Orientation set for a piece id
    pub fn shapes_for(&self, id: PieceId) -> Option<&[ShapeCells]> {
        self.piece(id).map(|p| p.orientations())
    }

    /// Cell count of a piece id
    pub fn piece_size(&self, id: PieceId) -> Option<u8> {
        self.piece(id).map(|p| p.size)
    }
}

/// Process-wide catalog, built once and shared read-only across games
pub fn catalog() -> &'static PieceCatalog {
    static CATALOG: OnceLock<PieceCatalog> = OnceLock::new();
    CATALOG.get_or_init(PieceCatalog::build)
}
