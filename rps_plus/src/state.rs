use crate::Move;

/// Number of rounds in one game.
pub const TOTAL_ROUNDS: u32 = 3;

/// Which side of the table a move belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    User,
    Bot,
}

/// The full state of one game.
///
/// There is exactly one live instance per referee; it is only ever mutated
/// by [`apply_round`](crate::apply_round) and replaced wholesale on reset.
/// Callers that share a referee across threads must serialize access
/// themselves; nothing here locks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Starts at 1 and advances once per resolved round. The game is over
    /// once it exceeds [`TOTAL_ROUNDS`].
    pub round_number: u32,
    pub user_score: u32,
    pub bot_score: u32,
    /// Latched once the user has played their bomb; only a reset clears it.
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub game_over: bool,
    /// `None` until the first round has been applied.
    pub last_user_move: Option<Move>,
    pub last_bot_move: Option<Move>,
    /// Human-readable outcome of the most recent round, empty before any.
    pub last_round_result: String,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            round_number: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
            last_user_move: None,
            last_bot_move: None,
            last_round_result: String::new(),
        }
    }

    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    /// The score in the `"<user>-<bot>"` format used by the tool responses.
    pub fn score_string(&self) -> String {
        format!("{}-{}", self.user_score, self.bot_score)
    }

    /// Rounds still to be played, zero once the game is over.
    pub fn rounds_left(&self) -> u32 {
        (TOTAL_ROUNDS + 1).saturating_sub(self.round_number)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state() {
        let state = GameState::new();
        assert_eq!(state.round_number, 1);
        assert_eq!(state.score_string(), "0-0");
        assert_eq!(state.rounds_left(), 3);
        assert!(!state.bomb_used(Side::User));
        assert!(!state.bomb_used(Side::Bot));
        assert_eq!(state.last_user_move, None);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn rounds_left_clamps_at_zero() {
        let mut state = GameState::new();
        state.round_number = 4;
        assert_eq!(state.rounds_left(), 0);
        state.round_number = 7;
        assert_eq!(state.rounds_left(), 0);
    }
}
