use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{GameState, Move, STANDARD_MOVES};

/// Chance that the bot plays its bomb on any round after the first.
pub const BOMB_PROBABILITY: f64 = 0.3;

/// Picks the bot's move for the current round.
///
/// Never bombs on round 1. On later rounds, bombs with probability
/// [`BOMB_PROBABILITY`] while the bomb is still available, and otherwise
/// plays a uniformly random standard move. Reads the state, never mutates it.
pub fn choose_bot_move(state: &GameState, rng: &mut StdRng) -> Move {
    if state.round_number > 1 && !state.bot_bomb_used && rng.gen::<f64>() < BOMB_PROBABILITY {
        return Move::Bomb;
    }
    *STANDARD_MOVES.choose(rng).unwrap()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn never_bombs_on_round_one() {
        let mut rng = StdRng::seed_from_u64(0);
        let state = GameState::new();
        for _ in 0..500 {
            assert_ne!(choose_bot_move(&state, &mut rng), Move::Bomb);
        }
    }

    #[test]
    fn never_bombs_twice() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = GameState::new();
        state.round_number = 2;
        state.bot_bomb_used = true;
        for _ in 0..500 {
            assert_ne!(choose_bot_move(&state, &mut rng), Move::Bomb);
        }
    }

    #[test]
    fn bombs_eventually_after_round_one() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = GameState::new();
        state.round_number = 2;
        assert!((0..500).any(|_| choose_bot_move(&state, &mut rng) == Move::Bomb));
    }
}
