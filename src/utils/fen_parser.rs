//! FEN position parsing for fixtures and tests.
//!
//! Only the placement, side-to-move, castling, and en-passant fields feed
//! the game state; the engine keeps no move clocks, so trailing clock
//! fields are accepted and ignored.

use crate::board::Board;
use crate::errors::ChessErrors;
use crate::game_state::GameState;
use crate::piece_types::{Color, PieceClass, PieceRecord};
use crate::utils::algebraic::location_from_algebraic;

fn record_from_char(c: char) -> Result<PieceRecord, ChessErrors> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let class = match c.to_ascii_lowercase() {
        'p' => PieceClass::Pawn,
        'n' => PieceClass::Knight,
        'b' => PieceClass::Bishop,
        'r' => PieceClass::Rook,
        'q' => PieceClass::Queen,
        'k' => PieceClass::King,
        _ => return Err(ChessErrors::InvalidFenString),
    };
    Ok(PieceRecord::new(class, color))
}

/// Builds a game state from a FEN record.
pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut fields = fen.split_ascii_whitespace();

    let placement = fields.next().ok_or(ChessErrors::InvalidFenString)?;
    let mut board = Board::default();
    let mut rank: i8 = 7;
    let mut file: i8 = 0;
    for c in placement.chars() {
        match c {
            '/' => {
                if file != 8 || rank == 0 {
                    return Err(ChessErrors::InvalidFenString);
                }
                rank -= 1;
                file = 0;
            }
            '1'..='8' => {
                file += c as i8 - '0' as i8;
                if file > 8 {
                    return Err(ChessErrors::InvalidFenString);
                }
            }
            _ => {
                if file > 7 {
                    return Err(ChessErrors::InvalidFenString);
                }
                *board.at(&(file, rank)) = Some(record_from_char(c)?);
                file += 1;
            }
        }
    }
    if rank != 0 || file != 8 {
        return Err(ChessErrors::InvalidFenString);
    }

    let turn = match fields.next() {
        Some("w") => Color::White,
        Some("b") => Color::Black,
        _ => return Err(ChessErrors::InvalidFenString),
    };

    let mut can_castle_king_white = false;
    let mut can_castle_queen_white = false;
    let mut can_castle_king_black = false;
    let mut can_castle_queen_black = false;
    let castling = fields.next().ok_or(ChessErrors::InvalidFenString)?;
    for c in castling.chars() {
        match c {
            'K' => can_castle_king_white = true,
            'Q' => can_castle_queen_white = true,
            'k' => can_castle_king_black = true,
            'q' => can_castle_queen_black = true,
            '-' => {}
            _ => return Err(ChessErrors::InvalidFenString),
        }
    }

    let en_passant = fields.next().ok_or(ChessErrors::InvalidFenString)?;
    let en_passant_file = if en_passant == "-" {
        None
    } else {
        let target = location_from_algebraic(en_passant)
            .map_err(|_| ChessErrors::InvalidFenString)?;
        Some(target.0)
    };

    // Halfmove clock and fullmove number, when present, are ignored.

    let mut state = GameState::with_board(board);
    state.turn = turn;
    state.can_castle_king_white = can_castle_king_white;
    state.can_castle_queen_white = can_castle_queen_white;
    state.can_castle_king_black = can_castle_king_black;
    state.can_castle_queen_black = can_castle_queen_black;
    state.en_passant_file = en_passant_file;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn startpos_fen_matches_the_built_in_start() {
        let dut = parse_fen(STARTPOS_FEN).expect("startpos should parse");
        assert_eq!(dut, GameState::new_game());
    }

    #[test]
    fn side_castling_and_en_passant_fields_are_read() {
        let dut = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b Kq e3 0 1")
            .expect("position should parse");
        assert_eq!(dut.turn, Color::Black);
        assert!(dut.can_castle_king_white);
        assert!(!dut.can_castle_queen_white);
        assert!(!dut.can_castle_king_black);
        assert!(dut.can_castle_queen_black);
        assert_eq!(dut.en_passant_file, Some(4));
    }

    #[test]
    fn clock_fields_are_optional() {
        assert!(parse_fen("8/8/8/8/8/8/8/4K2k w - -").is_ok());
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for bad in [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNT w KQkq - 0 1",
        ] {
            assert_eq!(parse_fen(bad), Err(ChessErrors::InvalidFenString), "fen: {bad}");
        }
    }
}
