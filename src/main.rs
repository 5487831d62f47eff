//! Interactive terminal game against the uniform-random opponent.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use quince_chess::engine_random::RandomMover;
use quince_chess::game_state::GameState;
use quince_chess::utils::algebraic::{move_from_coordinates, move_to_coordinates};
use quince_chess::utils::render_game_state::render_game_state;

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let opponent = RandomMover;
    let no_highlight = HashSet::new();
    let mut state = GameState::new_game();

    loop {
        println!("{}", render_game_state(&state, &no_highlight));

        if let Some((result, comment)) = state.evaluate_outcome() {
            println!("Game over: {result:?} by {comment:?}");
            return;
        }

        state = loop {
            print!("move? ");
            let _ = io::stdout().flush();
            let Some(Ok(line)) = lines.next() else {
                return;
            };
            match move_from_coordinates(&line) {
                Ok(requested) => match state.make_move(&requested) {
                    Ok(next) => break next,
                    Err(reason) => println!("{reason}"),
                },
                Err(reason) => println!("{reason}"),
            }
        };

        if let Some(reply) = opponent.choose_move(&state) {
            println!("opponent plays {}", move_to_coordinates(&reply));
            state = state.apply_unconditional(&reply);
        }
        // With no reply available the next round of the loop reports the
        // result on the opponent's position.
    }
}
