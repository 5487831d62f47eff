//! Turn-by-turn game state, legality filtering, and move application.
//!
//! `GameState` values are immutable snapshots: applying a move builds a
//! fresh state and leaves the receiver untouched, so callers may hold any
//! number of earlier positions (explored lines, history) without
//! coordination. Castling eligibility and the en-passant window are kept as
//! explicit per-state fields updated on every application.

use crate::board::{
    Board, BISHOP_RAYS, KING_STEPS, KNIGHT_HOPS, QUEEN_RAYS, ROOK_RAYS,
};
use crate::board_location::BoardLocation;
use crate::chess_move::ChessMove;
use crate::errors::ChessErrors;
use crate::piece_types::{Color, PieceClass, PieceRecord};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    WhiteWin,
    BlackWin,
    Draw,
}

/// Reason code attached to a recorded result. The engine itself produces
/// `Checkmate` and `Stalemate`; the remaining variants are recorded by
/// callers that track clocks, repetitions, or agreements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResultComment {
    Checkmate,
    Timeout,
    Stalemate,
    InsufficientMaterial,
    Agreement,
    Repetition,
    FiftyMoveRule,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub can_castle_king_white: bool,
    pub can_castle_queen_white: bool,
    pub can_castle_king_black: bool,
    pub can_castle_queen_black: bool,
    /// File on which an en-passant capture is legal this half-move.
    pub en_passant_file: Option<i8>,
    pub result: Option<GameResult>,
    pub result_comment: Option<GameResultComment>,
}

const BACK_RANK_CLASSES: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

#[inline]
fn home_rank(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

impl GameState {
    /// Fresh state around a board: White to move, every castling right
    /// held, no en-passant window, no recorded result.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            turn: Color::White,
            can_castle_king_white: true,
            can_castle_queen_white: true,
            can_castle_king_black: true,
            can_castle_queen_black: true,
            en_passant_file: None,
            result: None,
            result_comment: None,
        }
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        let mut board = Board::default();
        for (file, class) in BACK_RANK_CLASSES.iter().enumerate() {
            let file = file as i8;
            *board.at(&(file, 0)) = Some(PieceRecord::new(*class, Color::White));
            *board.at(&(file, 1)) = Some(PieceRecord::new(PieceClass::Pawn, Color::White));
            *board.at(&(file, 6)) = Some(PieceRecord::new(PieceClass::Pawn, Color::Black));
            *board.at(&(file, 7)) = Some(PieceRecord::new(*class, Color::Black));
        }
        Self::with_board(board)
    }

    /// Endgame skeleton: kings on their home squares, rooks on all four
    /// corners, nothing else.
    pub fn rook_king_endgame() -> Self {
        let mut board = Board::default();
        for color in [Color::White, Color::Black] {
            let rank = home_rank(color);
            *board.at(&(0, rank)) = Some(PieceRecord::new(PieceClass::Rook, color));
            *board.at(&(4, rank)) = Some(PieceRecord::new(PieceClass::King, color));
            *board.at(&(7, rank)) = Some(PieceRecord::new(PieceClass::Rook, color));
        }
        Self::with_board(board)
    }

    /// The starting position with every pawn removed.
    pub fn no_pawns_game() -> Self {
        let mut board = Board::default();
        for (file, class) in BACK_RANK_CLASSES.iter().enumerate() {
            let file = file as i8;
            *board.at(&(file, 0)) = Some(PieceRecord::new(*class, Color::White));
            *board.at(&(file, 7)) = Some(PieceRecord::new(*class, Color::Black));
        }
        Self::with_board(board)
    }

    /// Pseudo-legal moves for the side to move. May include moves that
    /// leave the mover's own king attacked.
    pub fn candidate_moves(&self) -> Vec<ChessMove> {
        self.moves_for(self.turn, true)
    }

    fn moves_for(&self, color: Color, include_castling: bool) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for from in self.board.player_squares(color) {
            let Some(piece) = *self.board.view(&from) else {
                continue;
            };
            match piece.class {
                PieceClass::Pawn => {
                    moves.extend(self.board.pawn_moves_from(&from, color, self.en_passant_file))
                }
                PieceClass::Knight => {
                    moves.extend(self.board.moves_from_shapes(&from, color, Some(1), &KNIGHT_HOPS))
                }
                PieceClass::Bishop => {
                    moves.extend(self.board.moves_from_shapes(&from, color, None, &BISHOP_RAYS))
                }
                PieceClass::Rook => {
                    moves.extend(self.board.moves_from_shapes(&from, color, None, &ROOK_RAYS))
                }
                PieceClass::Queen => {
                    moves.extend(self.board.moves_from_shapes(&from, color, None, &QUEEN_RAYS))
                }
                PieceClass::King => {
                    moves.extend(self.board.moves_from_shapes(&from, color, Some(1), &KING_STEPS));
                    if include_castling {
                        self.push_castling_moves(&mut moves, color, &from);
                    }
                }
            }
        }
        moves
    }

    /// Castling candidates for a king standing on its home square: the
    /// right must be held, the rook must still sit on its corner, every
    /// square between them must be empty, and the king's start, transit,
    /// and destination squares must all be unthreatened.
    fn push_castling_moves(&self, moves: &mut Vec<ChessMove>, color: Color, from: &BoardLocation) {
        let rank = home_rank(color);
        if *from != (4, rank) {
            return;
        }
        let attacker = color.opposite();
        if self.threatened_by(from, attacker) {
            return;
        }

        let (can_king_side, can_queen_side) = match color {
            Color::White => (self.can_castle_king_white, self.can_castle_queen_white),
            Color::Black => (self.can_castle_king_black, self.can_castle_queen_black),
        };
        let rook = Some(PieceRecord::new(PieceClass::Rook, color));

        if can_king_side
            && *self.board.view(&(7, rank)) == rook
            && !self.board.occupied(&(5, rank))
            && !self.board.occupied(&(6, rank))
            && !self.threatened_by(&(5, rank), attacker)
            && !self.threatened_by(&(6, rank), attacker)
        {
            moves.push(ChessMove::new((4, rank), (6, rank)));
        }

        if can_queen_side
            && *self.board.view(&(0, rank)) == rook
            && !self.board.occupied(&(1, rank))
            && !self.board.occupied(&(2, rank))
            && !self.board.occupied(&(3, rank))
            && !self.threatened_by(&(2, rank), attacker)
            && !self.threatened_by(&(3, rank), attacker)
        {
            moves.push(ChessMove::new((4, rank), (2, rank)));
        }
    }

    /// Could any pseudo-legal move of `attacker`'s pieces land on `square`?
    /// Castling is excluded from the attacking set: it can never capture,
    /// and excluding it keeps threat evaluation non-recursive.
    pub fn threatened_by(&self, square: &BoardLocation, attacker: Color) -> bool {
        self.moves_for(attacker, false)
            .iter()
            .any(|m| m.stop == *square)
    }

    /// Could the side not on move land a piece on this square?
    #[inline]
    pub fn threatened(&self, square: &BoardLocation) -> bool {
        self.threatened_by(square, self.turn.opposite())
    }

    /// Linear scan for the king of the given color. `None` signals a
    /// malformed position; well-formed games always hold one king a side.
    pub fn king_square(&self, color: Color) -> Option<BoardLocation> {
        self.board
            .player_squares(color)
            .into_iter()
            .find(|s| matches!(self.board.view(s), Some(piece) if piece.class == PieceClass::King))
    }

    pub fn king_threatened(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(square) => self.threatened_by(&square, color.opposite()),
            None => false,
        }
    }

    /// Candidate moves whose application leaves the mover's own king
    /// unthreatened.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        self.candidate_moves()
            .into_iter()
            .filter(|m| !self.apply_unconditional(m).king_threatened(self.turn))
            .collect()
    }

    /// Distinguishes the two failure reasons so callers can report them
    /// separately: `IllegalMove` when the move is not a candidate at all,
    /// `InCheck` when it is but would leave the mover's king attacked.
    pub fn check_legal_move(&self, m: &ChessMove) -> Result<(), ChessErrors> {
        if !self.candidate_moves().contains(m) {
            return Err(ChessErrors::IllegalMove);
        }
        if self.apply_unconditional(m).king_threatened(self.turn) {
            return Err(ChessErrors::InCheck);
        }
        Ok(())
    }

    /// Validates then applies. The receiver is never mutated; on error the
    /// caller keeps the prior state and may retry.
    pub fn make_move(&self, m: &ChessMove) -> Result<GameState, ChessErrors> {
        self.check_legal_move(m)?;
        Ok(self.apply_unconditional(m))
    }

    /// Applies a move with no legality check. Used by the legality filter
    /// itself and by trusted callers that pre-validated, e.g. replaying a
    /// recorded game.
    pub fn apply_unconditional(&self, m: &ChessMove) -> GameState {
        let mut next = self.clone();
        next.result = None;
        next.result_comment = None;

        let moved = *self.board.view(&m.start);
        let captured = *self.board.view(&m.stop);

        if let Some(piece) = moved {
            // A pawn landing diagonally on an empty square captures in
            // passing: the bypassed pawn sits beside the origin.
            if piece.class == PieceClass::Pawn && m.start.0 != m.stop.0 && captured.is_none() {
                *next.board.at(&(m.stop.0, m.start.1)) = None;
            }
        }

        *next.board.at(&m.stop) = match (moved, m.promote_to) {
            (Some(piece), Some(class)) => Some(PieceRecord::new(class, piece.color)),
            _ => moved,
        };
        *next.board.at(&m.start) = None;

        // The king's two-file hop carries the rook over.
        if let Some(piece) = moved {
            if piece.class == PieceClass::King
                && m.start == (4, home_rank(piece.color))
                && m.start.1 == m.stop.1
            {
                let rank = m.start.1;
                if m.stop.0 == 6 {
                    *next.board.at(&(5, rank)) = Some(PieceRecord::new(PieceClass::Rook, piece.color));
                    *next.board.at(&(7, rank)) = None;
                } else if m.stop.0 == 2 {
                    *next.board.at(&(3, rank)) = Some(PieceRecord::new(PieceClass::Rook, piece.color));
                    *next.board.at(&(0, rank)) = None;
                }
            }
        }

        // The en-passant window opens on a double push and closes on any
        // other move: the option lasts exactly one half-move.
        next.en_passant_file = match moved {
            Some(piece) if piece.class == PieceClass::Pawn && (m.stop.1 - m.start.1).abs() == 2 => {
                Some(m.start.0)
            }
            _ => None,
        };

        if let Some(piece) = moved {
            match (piece.class, piece.color) {
                (PieceClass::King, Color::White) => {
                    next.can_castle_king_white = false;
                    next.can_castle_queen_white = false;
                }
                (PieceClass::King, Color::Black) => {
                    next.can_castle_king_black = false;
                    next.can_castle_queen_black = false;
                }
                (PieceClass::Rook, Color::White) => {
                    if m.start == (0, 0) {
                        next.can_castle_queen_white = false;
                    } else if m.start == (7, 0) {
                        next.can_castle_king_white = false;
                    }
                }
                (PieceClass::Rook, Color::Black) => {
                    if m.start == (0, 7) {
                        next.can_castle_queen_black = false;
                    } else if m.start == (7, 7) {
                        next.can_castle_king_black = false;
                    }
                }
                _ => {}
            }
        }

        // A rook captured on its home corner loses the right as surely as
        // one that moved away.
        if let Some(piece) = captured {
            if piece.class == PieceClass::Rook {
                match (m.stop, piece.color) {
                    ((0, 0), Color::White) => next.can_castle_queen_white = false,
                    ((7, 0), Color::White) => next.can_castle_king_white = false,
                    ((0, 7), Color::Black) => next.can_castle_queen_black = false,
                    ((7, 7), Color::Black) => next.can_castle_king_black = false,
                    _ => {}
                }
            }
        }

        next.turn = self.turn.opposite();
        next
    }

    /// Classifies a position with no legal moves as checkmate or
    /// stalemate; `None` while moves remain. Repetition and move-clock
    /// draws are a caller concern.
    pub fn evaluate_outcome(&self) -> Option<(GameResult, GameResultComment)> {
        if !self.legal_moves().is_empty() {
            return None;
        }
        if self.king_threatened(self.turn) {
            let result = match self.turn {
                Color::White => GameResult::BlackWin,
                Color::Black => GameResult::WhiteWin,
            };
            Some((result, GameResultComment::Checkmate))
        } else {
            Some((GameResult::Draw, GameResultComment::Stalemate))
        }
    }

    /// Copy of this state with a result recorded.
    pub fn with_result(&self, result: GameResult, comment: GameResultComment) -> GameState {
        let mut next = self.clone();
        next.result = Some(result);
        next.result_comment = Some(comment);
        next
    }
}
