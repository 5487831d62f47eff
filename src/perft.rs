//! Legal-move-tree node counting for generator validation.

use crate::game_state::GameState;

/// Counts the leaf nodes of the legal move tree to the given depth. Depth
/// zero is the position itself.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|m| perft(&state.apply_unconditional(m), depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    // The pawn-heavy rook endgame exercises en-passant legality pins.
    const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn startpos_node_counts() {
        let state = GameState::new_game();
        assert_eq!(perft(&state, 1), 20);
        assert_eq!(perft(&state, 2), 400);
        assert_eq!(perft(&state, 3), 8_902);
    }

    #[test]
    fn endgame_node_counts() {
        let state = parse_fen(ENDGAME_FEN).expect("endgame position should parse");
        assert_eq!(perft(&state, 1), 14);
        assert_eq!(perft(&state, 2), 191);
        assert_eq!(perft(&state, 3), 2_812);
    }

    #[test]
    #[ignore = "deep counts take a while with the unoptimized legality filter"]
    fn deep_node_counts() {
        assert_eq!(perft(&GameState::new_game(), 4), 197_281);
        let endgame = parse_fen(ENDGAME_FEN).expect("endgame position should parse");
        assert_eq!(perft(&endgame, 4), 43_238);
    }
}
