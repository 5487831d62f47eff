//! Move value type and square-set projections.

use std::collections::HashSet;

use crate::board_location::BoardLocation;
use crate::piece_types::PieceClass;

/// A move from one square to another. Two moves are the same move iff all
/// three fields match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    /// Requested promotion class; `None` for non-promotion moves.
    pub promote_to: Option<PieceClass>,
}

impl ChessMove {
    #[inline]
    pub const fn new(start: BoardLocation, stop: BoardLocation) -> Self {
        Self {
            start,
            stop,
            promote_to: None,
        }
    }

    #[inline]
    pub const fn promoting(start: BoardLocation, stop: BoardLocation, class: PieceClass) -> Self {
        Self {
            start,
            stop,
            promote_to: Some(class),
        }
    }
}

/// Collects the set of origin squares of the given moves, e.g. to highlight
/// every piece that has at least one move.
pub fn from_squares(moves: &[ChessMove]) -> HashSet<BoardLocation> {
    moves.iter().map(|m| m.start).collect()
}

/// Collects the set of destination squares of the given moves.
pub fn to_squares(moves: &[ChessMove]) -> HashSet<BoardLocation> {
    moves.iter().map(|m| m.stop).collect()
}
