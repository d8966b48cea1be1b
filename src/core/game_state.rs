//! Game state module - manages the complete game state
//!
//! Ties together board, catalog, inventories, and turn sequencing. The only
//! mutating operation is `attempt_move`; every rejection leaves the state
//! untouched. One value per game session; no process-wide mutable state.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::core::board::Board;
use crate::core::inventory::Inventory;
use crate::core::pieces::{catalog, ShapeCells};
use crate::core::scoring::{score_color, winners, ColorScore};
use crate::core::snapshot::GameSnapshot;
use crate::core::validator::{validate_placement, PlacementError};
use crate::types::{Color, GameStatus, PieceId, BOARD_SIZE};

/// Reasons a move request is rejected.
///
/// All of these are expected outcomes returned as values; the game stays
/// usable after any number of rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    OutOfBounds,
    CellOccupied,
    MissingCornerAnchor,
    SameColorEdgeContact,
    NoCornerContact,
    UnknownPiece,
    InvalidOrientation,
    PieceAlreadyUsed,
    NotYourTurn,
    GameAlreadyFinished,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::OutOfBounds => "out_of_bounds",
            MoveError::CellOccupied => "cell_occupied",
            MoveError::MissingCornerAnchor => "missing_corner_anchor",
            MoveError::SameColorEdgeContact => "same_color_edge_contact",
            MoveError::NoCornerContact => "no_corner_contact",
            MoveError::UnknownPiece => "unknown_piece",
            MoveError::InvalidOrientation => "invalid_orientation",
            MoveError::PieceAlreadyUsed => "piece_already_used",
            MoveError::NotYourTurn => "not_your_turn",
            MoveError::GameAlreadyFinished => "game_already_finished",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::OutOfBounds => PlacementError::OutOfBounds.message(),
            MoveError::CellOccupied => PlacementError::CellOccupied.message(),
            MoveError::MissingCornerAnchor => PlacementError::MissingCornerAnchor.message(),
            MoveError::SameColorEdgeContact => PlacementError::SameColorEdgeContact.message(),
            MoveError::NoCornerContact => PlacementError::NoCornerContact.message(),
            MoveError::UnknownPiece => "piece id is not in the catalog",
            MoveError::InvalidOrientation => "orientation is not valid for this piece",
            MoveError::PieceAlreadyUsed => "piece was already placed",
            MoveError::NotYourTurn => "it is another color's turn",
            MoveError::GameAlreadyFinished => "the game is over",
        }
    }
}

impl From<PlacementError> for MoveError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::OutOfBounds => MoveError::OutOfBounds,
            PlacementError::CellOccupied => MoveError::CellOccupied,
            PlacementError::MissingCornerAnchor => MoveError::MissingCornerAnchor,
            PlacementError::SameColorEdgeContact => MoveError::SameColorEdgeContact,
            PlacementError::NoCornerContact => MoveError::NoCornerContact,
        }
    }
}

/// A committed placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub piece: PieceId,
    pub orientation: usize,
    pub anchor: (i8, i8),
    /// Absolute board cells covered by the placement
    pub cells: ShapeCells,
}

/// Result of a committed move, including what turn advancement did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Colors passed over because they still hold pieces but had no legal move
    pub skipped: ArrayVec<Color, 4>,
    /// Color now to move; None when the game finished
    pub next_turn: Option<Color>,
}

/// Report produced once the game is finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverReport {
    pub scores: [ColorScore; 4],
    pub winners: ArrayVec<Color, 4>,
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    inventories: [Inventory; 4],
    /// Turn-order index of the color to move
    turn: usize,
    status: GameStatus,
    moves: Vec<MoveRecord>,
    /// Sticky no-legal-move flags. Sound because the board only grows and a
    /// blocked color's own cell set is frozen, so a color that ran out of
    /// legal moves never regains one.
    blocked: [bool; 4],
}

impl GameState {
    /// New game: empty board, full inventories, Blue to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            inventories: [Inventory::full(); 4],
            turn: 0,
            status: GameStatus::InProgress,
            moves: Vec::new(),
            blocked: [false; 4],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Color to move; None once finished
    pub fn current_turn(&self) -> Option<Color> {
        match self.status {
            GameStatus::InProgress => Color::from_index(self.turn),
            GameStatus::Finished => None,
        }
    }

    pub fn inventory(&self, color: Color) -> Inventory {
        self.inventories[color.index()]
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// True iff the color has not placed any piece yet
    pub fn is_first_move(&self, color: Color) -> bool {
        !self.board.has_color(color)
    }

    /// Whether any (piece, orientation, anchor) triple is legal for the color
    pub fn has_legal_move(&self, color: Color) -> bool {
        if self.blocked[color.index()] {
            return false;
        }
        let inventory = self.inventories[color.index()];
        if inventory.is_empty() {
            return false;
        }
        let first = self.is_first_move(color);

        for id in inventory.ids() {
            // Valid inventory ids always exist in the catalog.
            let Some(piece) = catalog().piece(id) else {
                continue;
            };
            for shape in piece.orientations() {
                for y in 0..BOARD_SIZE as i8 {
                    for x in 0..BOARD_SIZE as i8 {
                        if validate_placement(&self.board, shape, (x, y), color, first).is_ok() {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Attempt to place a piece; the single authoritative mutation.
    ///
    /// All-or-nothing: on any rejection the board, inventories, and turn are
    /// unchanged.
    pub fn attempt_move(
        &mut self,
        color: Color,
        piece_id: PieceId,
        orientation_index: usize,
        anchor: (i8, i8),
    ) -> Result<MoveOutcome, MoveError> {
        if self.status == GameStatus::Finished {
            return Err(MoveError::GameAlreadyFinished);
        }
        if self.current_turn() != Some(color) {
            return Err(MoveError::NotYourTurn);
        }
        let piece = catalog().piece(piece_id).ok_or(MoveError::UnknownPiece)?;
        let shape = piece
            .orientation(orientation_index)
            .ok_or(MoveError::InvalidOrientation)?;
        if !self.inventories[color.index()].contains(piece_id) {
            return Err(MoveError::PieceAlreadyUsed);
        }

        let first = self.is_first_move(color);
        validate_placement(&self.board, shape, anchor, color, first)?;

        // Commit.
        let cells: ShapeCells = shape
            .iter()
            .map(|&(dx, dy)| (anchor.0 + dx, anchor.1 + dy))
            .collect();
        self.board.occupy(&cells, color, piece_id);
        self.inventories[color.index()].take(piece_id);
        let record = MoveRecord {
            color,
            piece: piece_id,
            orientation: orientation_index,
            anchor,
            cells,
        };
        self.moves.push(record.clone());
        debug!(
            color = color.as_str(),
            piece = piece_id,
            x = anchor.0,
            y = anchor.1,
            "piece placed"
        );

        let (skipped, next_turn) = self.advance_turn();
        Ok(MoveOutcome {
            record,
            skipped,
            next_turn,
        })
    }

    /// Select the next color with a legal move, skipping those without one.
    /// Finishes the game when nobody can move.
    fn advance_turn(&mut self) -> (ArrayVec<Color, 4>, Option<Color>) {
        let mut skipped = ArrayVec::new();

        for offset in 1..=4 {
            let index = (self.turn + offset) % 4;
            let color = Color::ALL[index];

            if !self.inventories[index].is_empty() && self.has_legal_move(color) {
                self.turn = index;
                return (skipped, Some(color));
            }

            self.blocked[index] = self.blocked[index] || !self.inventories[index].is_empty();
            if !self.inventories[index].is_empty() {
                debug!(color = color.as_str(), "no legal move, skipping");
                skipped.push(color);
            }
        }

        self.status = GameStatus::Finished;
        info!(moves = self.moves.len(), "no color has a legal move, game finished");
        (skipped, None)
    }

    /// Last piece a color placed, if any
    fn last_placed(&self, color: Color) -> Option<PieceId> {
        self.moves
            .iter()
            .rev()
            .find(|m| m.color == color)
            .map(|m| m.piece)
    }

    /// Final scores and winners; None while the game is in progress
    pub fn game_over_report(&self) -> Option<GameOverReport> {
        if self.status != GameStatus::Finished {
            return None;
        }
        let scores = Color::ALL.map(|color| {
            score_color(color, self.inventories[color.index()], self.last_placed(color))
        });
        let winners = winners(&scores);
        Some(GameOverReport { scores, winners })
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.status = self.status;
        out.current_turn = self.current_turn();
        for color in Color::ALL {
            out.remaining[color.index()] = self.inventories[color.index()].ids();
        }
        out.move_count = self.moves.len() as u32;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
