//! Legal move generation.
//!
//! Moves are found by scanning outward from every piece of the mover's
//! color (an anchor): a walk over one or more opponent pieces that lands on
//! an empty cell makes that cell a legal destination.

use std::collections::BTreeSet;

use crate::board::{Board, Cell, Color, Step};
use crate::constants::DELTA;
use crate::position::Position;

/// All legal destinations for `color`, deduplicated and sorted by (row, col).
///
/// A color with no pieces on the board has no moves.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Position> {
    let opp = color.opponent().cell();
    let mut found = BTreeSet::new();

    for anchor in board.points_of(color) {
        for delta in DELTA {
            let landing = board.scan_direction(anchor, delta, |cell, len| {
                if cell == opp {
                    Step::Continue
                } else if cell == Cell::Empty && len > 0 {
                    Step::Record
                } else {
                    Step::Stop
                }
            });
            if let Some((pt, _)) = landing {
                found.insert(Position::from_point(pt));
            }
        }
    }

    found.into_iter().collect()
}

/// Whether placing `color` at `pos` would capture at least one piece.
pub fn is_legal(board: &Board, color: Color, pos: Position) -> bool {
    !board.flips(color, pos).is_empty()
}

/// Whether `color` has any legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Position::all().any(|pos| is_legal(board, color, pos))
}
