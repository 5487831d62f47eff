//! Coordinate notation for squares and moves.
//!
//! Squares read file letter then rank digit (`e4`); a move is two square
//! tokens separated by whitespace (`e2 e4`). Malformed input surfaces an
//! error, never a panic.

use crate::board_location::{on_board, BoardLocation};
use crate::chess_move::ChessMove;
use crate::errors::ChessErrors;
use crate::piece_types::PieceClass;

/// Convert a coordinate square (for example: "e4") to a board location.
pub fn location_from_algebraic(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic);
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic);
    }
    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a board location to a coordinate square (for example: "e4").
pub fn location_to_algebraic(x: &BoardLocation) -> Result<String, ChessErrors> {
    if !on_board(x) {
        return Err(ChessErrors::OutOfBounds);
    }
    let file = char::from(b'a' + x.0 as u8);
    let rank = char::from(b'1' + x.1 as u8);
    Ok(format!("{file}{rank}"))
}

/// Parses the two-token coordinate form, e.g. `"e2 e4"`. The produced move
/// carries no promotion piece.
pub fn move_from_coordinates(text: &str) -> Result<ChessMove, ChessErrors> {
    let mut tokens = text.split_whitespace();
    let start = tokens.next().ok_or(ChessErrors::InvalidAlgebraic)?;
    let stop = tokens.next().ok_or(ChessErrors::InvalidAlgebraic)?;
    if tokens.next().is_some() {
        return Err(ChessErrors::InvalidAlgebraic);
    }
    Ok(ChessMove::new(
        location_from_algebraic(start)?,
        location_from_algebraic(stop)?,
    ))
}

/// Renders a move in the two-token coordinate form, with the promotion
/// class letter appended when one is carried. Off-board components render
/// as a placeholder rather than failing.
pub fn move_to_coordinates(m: &ChessMove) -> String {
    let start = location_to_algebraic(&m.start).unwrap_or_else(|_| "??".to_owned());
    let stop = location_to_algebraic(&m.stop).unwrap_or_else(|_| "??".to_owned());
    match m.promote_to {
        Some(class) => {
            let letter = match class {
                PieceClass::Knight => 'n',
                PieceClass::Bishop => 'b',
                PieceClass::Rook => 'r',
                _ => 'q',
            };
            format!("{start} {stop} {letter}")
        }
        None => format!("{start} {stop}"),
    }
}
