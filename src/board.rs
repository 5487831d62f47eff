//! The 8x8 piece grid and the shape-based reachability generators.
//!
//! A single ray-walk primitive covers every non-pawn piece: leapers pass a
//! hop limit of one with their hop offsets, sliders pass an unbounded limit
//! with their ray offsets. Only pawns, with asymmetric move and capture
//! directions plus the en-passant exception, get bespoke handling.

use crate::board_location::{on_board, slide_from, BoardLocation, Offset};
use crate::chess_move::ChessMove;
use crate::piece_types::{Color, PieceClass, PieceRecord};

pub const KNIGHT_HOPS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_STEPS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_RAYS: [Offset; 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub const BISHOP_RAYS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const QUEEN_RAYS: [Offset; 8] = KING_STEPS;

/// Promotion classes fanned out for a pawn reaching the back rank.
pub const PROMOTION_CLASSES: [PieceClass; 4] = [
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Rook,
    PieceClass::Queen,
];

/// Fixed 8x8 mapping from location to piece, indexed `[file][rank]`.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn view(&self, x: &BoardLocation) -> &Option<PieceRecord> {
        &self.buffer[x.0 as usize][x.1 as usize]
    }

    #[inline]
    pub fn at(&mut self, x: &BoardLocation) -> &mut Option<PieceRecord> {
        &mut self.buffer[x.0 as usize][x.1 as usize]
    }

    #[inline]
    pub fn occupied(&self, x: &BoardLocation) -> bool {
        self.view(x).is_some()
    }

    #[inline]
    pub fn occupied_by(&self, x: &BoardLocation, color: Color) -> bool {
        matches!(self.view(x), Some(piece) if piece.color == color)
    }

    /// All squares holding a piece of the given color, in rank-major order.
    /// The order is stable but callers must not depend on it.
    pub fn player_squares(&self, color: Color) -> Vec<BoardLocation> {
        let mut squares = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                if self.occupied_by(&(file, rank), color) {
                    squares.push((file, rank));
                }
            }
        }
        squares
    }

    /// Walks one shape from `from`: an empty square is a destination and the
    /// walk continues, an enemy square is a capture destination and the walk
    /// stops, a friendly square stops the walk without a destination.
    pub fn shaped_moves_from(
        &self,
        from: &BoardLocation,
        color: Color,
        max_hops: Option<u8>,
        step: Offset,
    ) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for to in slide_from(*from, step, max_hops) {
            match self.view(&to) {
                None => moves.push(ChessMove::new(*from, to)),
                Some(target) => {
                    if target.color == color.opposite() {
                        moves.push(ChessMove::new(*from, to));
                    }
                    break;
                }
            }
        }
        moves
    }

    /// Folds [`Board::shaped_moves_from`] over a direction table.
    pub fn moves_from_shapes(
        &self,
        from: &BoardLocation,
        color: Color,
        max_hops: Option<u8>,
        shapes: &[Offset],
    ) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for step in shapes {
            moves.extend(self.shaped_moves_from(from, color, max_hops, *step));
        }
        moves
    }

    /// Pawn moves from one square: single push, double push from the start
    /// rank over two empty squares, diagonal captures, and the en-passant
    /// capture onto the file that opened this half-move.
    pub fn pawn_moves_from(
        &self,
        from: &BoardLocation,
        color: Color,
        en_passant_file: Option<i8>,
    ) -> Vec<ChessMove> {
        let (forward, start_rank, en_passant_rank): (i8, i8, i8) = match color {
            Color::White => (1, 1, 4),
            Color::Black => (-1, 6, 3),
        };

        let mut moves = Vec::new();

        let single = (from.0, from.1 + forward);
        if on_board(&single) && !self.occupied(&single) {
            push_pawn_advance(&mut moves, from, &single, color);

            let double = (from.0, from.1 + 2 * forward);
            if from.1 == start_rank && on_board(&double) && !self.occupied(&double) {
                moves.push(ChessMove::new(*from, double));
            }
        }

        for d_file in [-1i8, 1] {
            let diagonal = (from.0 + d_file, from.1 + forward);
            if !on_board(&diagonal) {
                continue;
            }
            if self.occupied_by(&diagonal, color.opposite()) {
                push_pawn_advance(&mut moves, from, &diagonal, color);
            } else if !self.occupied(&diagonal)
                && en_passant_file == Some(diagonal.0)
                && from.1 == en_passant_rank
            {
                moves.push(ChessMove::new(*from, diagonal));
            }
        }

        moves
    }
}

fn push_pawn_advance(
    moves: &mut Vec<ChessMove>,
    from: &BoardLocation,
    stop: &BoardLocation,
    color: Color,
) {
    let back_rank: i8 = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    if stop.1 == back_rank {
        for class in PROMOTION_CLASSES {
            moves.push(ChessMove::promoting(*from, *stop, class));
        }
    } else {
        moves.push(ChessMove::new(*from, *stop));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::to_squares;

    fn place(board: &mut Board, x: BoardLocation, class: PieceClass, color: Color) {
        *board.at(&x) = Some(PieceRecord::new(class, color));
    }

    #[test]
    fn player_squares_is_stable_and_color_filtered() {
        let mut dut = Board::default();
        place(&mut dut, (0, 0), PieceClass::Rook, Color::White);
        place(&mut dut, (3, 3), PieceClass::Queen, Color::White);
        place(&mut dut, (7, 7), PieceClass::King, Color::Black);

        assert_eq!(dut.player_squares(Color::White), vec![(0, 0), (3, 3)]);
        assert_eq!(dut.player_squares(Color::White), dut.player_squares(Color::White));
        assert_eq!(dut.player_squares(Color::Black), vec![(7, 7)]);
    }

    #[test]
    fn sliders_stop_on_friends_and_capture_enemies() {
        let mut dut = Board::default();
        place(&mut dut, (3, 3), PieceClass::Rook, Color::White);
        place(&mut dut, (3, 6), PieceClass::Pawn, Color::White);
        place(&mut dut, (6, 3), PieceClass::Pawn, Color::Black);

        let moves = dut.moves_from_shapes(&(3, 3), Color::White, None, &ROOK_RAYS);
        let stops = to_squares(&moves);

        // Up the file: blocked below the friendly pawn.
        assert!(stops.contains(&(3, 5)));
        assert!(!stops.contains(&(3, 6)));
        // Along the rank: the enemy pawn is a capture and the walk ends there.
        assert!(stops.contains(&(6, 3)));
        assert!(!stops.contains(&(7, 3)));
    }

    #[test]
    fn leapers_take_a_single_hop() {
        let mut dut = Board::default();
        place(&mut dut, (1, 0), PieceClass::Knight, Color::White);

        let moves = dut.moves_from_shapes(&(1, 0), Color::White, Some(1), &KNIGHT_HOPS);
        let stops = to_squares(&moves);
        assert_eq!(stops.len(), 3);
        assert!(stops.contains(&(0, 2)));
        assert!(stops.contains(&(2, 2)));
        assert!(stops.contains(&(3, 1)));
    }

    #[test]
    fn double_push_requires_both_squares_empty() {
        let mut dut = Board::default();
        place(&mut dut, (4, 1), PieceClass::Pawn, Color::White);
        place(&mut dut, (4, 2), PieceClass::Knight, Color::Black);

        // The blocker on e3 kills the single push and the jump over it.
        assert!(dut.pawn_moves_from(&(4, 1), Color::White, None).is_empty());

        *dut.at(&(4, 2)) = None;
        place(&mut dut, (4, 3), PieceClass::Knight, Color::Black);
        let moves = dut.pawn_moves_from(&(4, 1), Color::White, None);
        assert_eq!(moves, vec![ChessMove::new((4, 1), (4, 2))]);
    }

    #[test]
    fn pawn_captures_only_diagonally() {
        let mut dut = Board::default();
        place(&mut dut, (4, 3), PieceClass::Pawn, Color::White);
        place(&mut dut, (3, 4), PieceClass::Pawn, Color::Black);
        place(&mut dut, (4, 4), PieceClass::Pawn, Color::Black);

        let stops = to_squares(&dut.pawn_moves_from(&(4, 3), Color::White, None));
        assert_eq!(stops.len(), 1);
        assert!(stops.contains(&(3, 4)));
    }

    #[test]
    fn en_passant_needs_the_file_and_the_rank() {
        let mut dut = Board::default();
        place(&mut dut, (4, 4), PieceClass::Pawn, Color::White);
        place(&mut dut, (3, 4), PieceClass::Pawn, Color::Black);

        let stops = to_squares(&dut.pawn_moves_from(&(4, 4), Color::White, Some(3)));
        assert!(stops.contains(&(3, 5)));

        // No en-passant file, no capture onto the empty diagonal.
        let stops = to_squares(&dut.pawn_moves_from(&(4, 4), Color::White, None));
        assert!(!stops.contains(&(3, 5)));

        // Wrong rank: a pawn still on its third rank cannot capture in passing.
        place(&mut dut, (4, 2), PieceClass::Pawn, Color::White);
        let stops = to_squares(&dut.pawn_moves_from(&(4, 2), Color::White, Some(3)));
        assert!(!stops.contains(&(3, 3)));
    }

    #[test]
    fn back_rank_advances_fan_out_promotions() {
        let mut dut = Board::default();
        place(&mut dut, (0, 6), PieceClass::Pawn, Color::White);
        place(&mut dut, (1, 7), PieceClass::Rook, Color::Black);

        let moves = dut.pawn_moves_from(&(0, 6), Color::White, None);
        // Four promotion classes for the push plus four for the capture.
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.promote_to.is_some()));
        assert!(moves.contains(&ChessMove::promoting((0, 6), (1, 7), PieceClass::Queen)));
    }
}
