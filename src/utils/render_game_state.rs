//! Fixed-width terminal board renderer.
//!
//! Creates a human-readable board view for the interactive loop, tests,
//! and diagnostics in text environments.

use std::collections::HashSet;

use crate::board_location::BoardLocation;
use crate::game_state::GameState;
use crate::piece_types::{EMPTY_SQUARE_CODE, HIGHLIGHT_CODE};

/// Render the board to a fixed-width string: file letters as header and
/// footer, rank digits on both flanks, one two-character token per square.
/// Squares in `highlight` render as `**` regardless of occupancy.
pub fn render_game_state(state: &GameState, highlight: &HashSet<BoardLocation>) -> String {
    let mut out = String::new();

    out.push_str("  a  b  c  d  e  f  g  h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            let location = (file, rank);
            let token = if highlight.contains(&location) {
                HIGHLIGHT_CODE
            } else {
                match state.board.view(&location) {
                    Some(piece) => piece.short_code(),
                    None => EMPTY_SQUARE_CODE,
                }
            };
            out.push_str(token);
            out.push(' ');
        }

        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a  b  c  d  e  f  g  h\n");

    out
}
