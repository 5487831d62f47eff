//! Uniform-random move chooser.
//!
//! Selects uniformly from legal moves and is used by the interactive demo
//! opponent and for integration smoke tests.

use rand::prelude::IndexedRandom;

use crate::chess_move::ChessMove;
use crate::game_state::GameState;

pub struct RandomMover;

impl RandomMover {
    /// Picks uniformly among the legal moves; `None` when the position has
    /// no legal move (the game is over).
    pub fn choose_move(&self, state: &GameState) -> Option<ChessMove> {
        let moves = state.legal_moves();
        let mut rng = rand::rng();
        moves.as_slice().choose(&mut rng).copied()
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        RandomMover
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn chosen_moves_are_legal() {
        let state = GameState::new_game();
        let legal = state.legal_moves();
        for _ in 0..16 {
            let picked = RandomMover
                .choose_move(&state)
                .expect("starting position should have moves");
            assert!(legal.contains(&picked));
        }
    }

    #[test]
    fn finished_positions_yield_no_move() {
        let stalemate = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("position should parse");
        assert_eq!(RandomMover.choose_move(&stalemate), None);
    }
}
