use serde::{Deserialize, Serialize};

use crate::{GameState, InvalidMove, Move, Side, StatusReport, TOTAL_ROUNDS};

/// Who won a single round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

/// Checks a raw move string against the move vocabulary and, for a bomb,
/// against `side`'s bomb flag.
///
/// Reads the state but never mutates it.
pub fn validate_move(state: &GameState, side: Side, raw: &str) -> Result<Move, InvalidMove> {
    let mv: Move = raw.parse()?;
    if mv == Move::Bomb && state.bomb_used(side) {
        return Err(InvalidMove::BombAlreadyUsed);
    }
    Ok(mv)
}

/// The outcome of resolving one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Winner,
    pub explanation: String,
}

/// Determines the round winner for two already-validated moves.
///
/// Priority order: bomb against bomb, then either lone bomb, then identical
/// moves, then the standard cycle. Pure function, no state access, and no
/// legality checks; both moves must have passed validation upstream.
pub fn resolve_round(user_move: Move, bot_move: Move) -> RoundOutcome {
    let (winner, explanation) = match (user_move, bot_move) {
        (Move::Bomb, Move::Bomb) => (Winner::Draw, String::from("Both used bomb - draw!")),
        (Move::Bomb, _) => (Winner::User, String::from("Your bomb destroys everything!")),
        (_, Move::Bomb) => (Winner::Bot, String::from("My bomb destroys everything!")),
        _ if user_move == bot_move => (Winner::Draw, format!("Both picked {}!", user_move)),
        _ if user_move.beats(bot_move) => (
            Winner::User,
            format!("{} beats {}!", user_move.title_case(), bot_move),
        ),
        _ => (
            Winner::Bot,
            format!("{} beats {}!", bot_move.title_case(), user_move),
        ),
    };
    RoundOutcome {
        winner,
        explanation,
    }
}

/// Summary of a completed round, as reported back to the orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round_completed: u32,
    pub current_score: String,
    pub game_over: bool,
    pub rounds_left: u32,
}

/// Applies a resolved round to the state.
///
/// `round_winner` is trusted to be the [`resolve_round`] result for the same
/// two moves and is not re-checked here. Every field is written before this
/// returns, so the caller never observes a half-applied round.
pub fn apply_round(
    state: &mut GameState,
    user_move: Move,
    bot_move: Move,
    round_winner: Winner,
) -> RoundReport {
    state.last_user_move = Some(user_move);
    state.last_bot_move = Some(bot_move);

    if user_move == Move::Bomb {
        state.user_bomb_used = true;
    }
    if bot_move == Move::Bomb {
        state.bot_bomb_used = true;
    }

    state.last_round_result = String::from(match round_winner {
        Winner::User => {
            state.user_score += 1;
            "You won the round"
        }
        Winner::Bot => {
            state.bot_score += 1;
            "Bot won the round"
        }
        Winner::Draw => "Round was a draw",
    });

    state.round_number += 1;
    if state.round_number > TOTAL_ROUNDS {
        state.game_over = true;
    }

    RoundReport {
        round_completed: state.round_number - 1,
        current_score: state.score_string(),
        game_over: state.game_over,
        rounds_left: state.rounds_left(),
    }
}

/// Read-only snapshot for the status tool.
pub fn game_status(state: &GameState) -> StatusReport {
    StatusReport {
        round: state.round_number,
        score: state.score_string(),
        user_bomb_available: !state.user_bomb_used,
        bot_bomb_available: !state.bot_bomb_used,
        game_over: state.game_over,
        last_result: state.last_round_result.clone(),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn resolution_table() {
        assert_eq!(resolve_round(Move::Bomb, Move::Bomb).winner, Winner::Draw);
        assert_eq!(resolve_round(Move::Bomb, Move::Rock).winner, Winner::User);
        assert_eq!(resolve_round(Move::Rock, Move::Bomb).winner, Winner::Bot);
        assert_eq!(
            resolve_round(Move::Rock, Move::Scissors).winner,
            Winner::User
        );
        assert_eq!(resolve_round(Move::Paper, Move::Paper).winner, Winner::Draw);
    }

    #[test]
    fn explanations_name_the_moves() {
        assert_eq!(
            resolve_round(Move::Bomb, Move::Bomb).explanation,
            "Both used bomb - draw!"
        );
        assert_eq!(
            resolve_round(Move::Bomb, Move::Scissors).explanation,
            "Your bomb destroys everything!"
        );
        assert_eq!(
            resolve_round(Move::Scissors, Move::Bomb).explanation,
            "My bomb destroys everything!"
        );
        assert_eq!(
            resolve_round(Move::Paper, Move::Paper).explanation,
            "Both picked paper!"
        );
        assert_eq!(
            resolve_round(Move::Rock, Move::Scissors).explanation,
            "Rock beats scissors!"
        );
        assert_eq!(
            resolve_round(Move::Scissors, Move::Rock).explanation,
            "Rock beats scissors!"
        );
    }

    quickcheck! {
        fn resolution_is_symmetric(user_move: Move, bot_move: Move) -> bool {
            let forward = resolve_round(user_move, bot_move).winner;
            let backward = resolve_round(bot_move, user_move).winner;
            match forward {
                Winner::User => backward == Winner::Bot,
                Winner::Bot => backward == Winner::User,
                Winner::Draw => backward == Winner::Draw,
            }
        }

        fn validator_accepts_exactly_the_vocabulary(raw: String) -> bool {
            let state = GameState::new();
            let normalized = raw.trim().to_lowercase();
            match validate_move(&state, Side::User, &raw) {
                Ok(mv) => mv.as_str() == normalized,
                Err(InvalidMove::UnrecognizedMove { input }) => {
                    input == normalized
                        && !["rock", "paper", "scissors", "bomb"]
                            .contains(&normalized.as_str())
                }
                // Impossible with both bombs unused.
                Err(InvalidMove::BombAlreadyUsed) => false,
            }
        }
    }

    #[test]
    fn unknown_moves_are_rejected_with_the_normalized_input() {
        let state = GameState::new();
        let err = validate_move(&state, Side::User, " Lizard ").unwrap_err();
        assert_eq!(
            err,
            InvalidMove::UnrecognizedMove {
                input: String::from("lizard")
            }
        );
        assert_eq!(
            err.to_string(),
            "'lizard' is not a valid move. Choose: rock, paper, scissors, or bomb"
        );
    }

    #[test]
    fn bomb_is_validated_against_the_calling_side() {
        let mut state = GameState::new();
        assert_eq!(validate_move(&state, Side::User, "BOMB"), Ok(Move::Bomb));

        state.user_bomb_used = true;
        let err = validate_move(&state, Side::User, "bomb").unwrap_err();
        assert_eq!(err, InvalidMove::BombAlreadyUsed);
        assert_eq!(
            err.to_string(),
            "You already used your bomb! Choose rock, paper, or scissors"
        );
        // The bot's flag is independent, and standard moves stay legal.
        assert_eq!(validate_move(&state, Side::Bot, "bomb"), Ok(Move::Bomb));
        assert_eq!(validate_move(&state, Side::User, "rock"), Ok(Move::Rock));
    }

    #[test]
    fn three_updates_end_the_game() {
        let mut state = GameState::new();
        for round in 1..=TOTAL_ROUNDS {
            assert!(!state.game_over);
            let report = apply_round(&mut state, Move::Rock, Move::Rock, Winner::Draw);
            assert_eq!(report.round_completed, round);
        }
        assert_eq!(state.round_number, 4);
        assert!(state.game_over);
        assert!(state.user_score + state.bot_score <= TOTAL_ROUNDS);
        assert_eq!(state.rounds_left(), 0);
    }

    #[test]
    fn bomb_flag_latches_until_reset() {
        let mut state = GameState::new();
        apply_round(&mut state, Move::Bomb, Move::Paper, Winner::User);
        assert!(state.user_bomb_used);
        assert!(!state.bot_bomb_used);

        apply_round(&mut state, Move::Rock, Move::Bomb, Winner::Bot);
        assert!(state.user_bomb_used);
        assert!(state.bot_bomb_used);

        state = GameState::new();
        assert!(!state.user_bomb_used);
        assert!(!state.bot_bomb_used);
    }

    #[test]
    fn status_of_a_fresh_game() {
        let status = game_status(&GameState::new());
        assert_eq!(status.round, 1);
        assert_eq!(status.score, "0-0");
        assert!(status.user_bomb_available);
        assert!(status.bot_bomb_available);
        assert!(!status.game_over);
        assert_eq!(status.last_result, "");
    }

    #[test]
    fn full_game() {
        let mut state = GameState::new();

        // Round 1: rock against scissors.
        let outcome = resolve_round(Move::Rock, Move::Scissors);
        assert_eq!(outcome.winner, Winner::User);
        let report = apply_round(&mut state, Move::Rock, Move::Scissors, outcome.winner);
        assert_eq!(report.current_score, "1-0");
        assert!(!report.game_over);
        assert_eq!(report.rounds_left, 2);
        assert_eq!(state.last_round_result, "You won the round");

        // Round 2: the user spends their bomb.
        let outcome = resolve_round(Move::Bomb, Move::Paper);
        assert_eq!(outcome.explanation, "Your bomb destroys everything!");
        let report = apply_round(&mut state, Move::Bomb, Move::Paper, outcome.winner);
        assert_eq!(report.current_score, "2-0");
        assert!(state.user_bomb_used);
        assert_eq!(state.last_user_move, Some(Move::Bomb));

        // Round 3: the bot takes one back.
        let outcome = resolve_round(Move::Rock, Move::Paper);
        assert_eq!(outcome.winner, Winner::Bot);
        assert_eq!(outcome.explanation, "Paper beats rock!");
        let report = apply_round(&mut state, Move::Rock, Move::Paper, outcome.winner);
        assert_eq!(report.current_score, "2-1");
        assert_eq!(report.round_completed, 3);
        assert!(report.game_over);
        assert_eq!(report.rounds_left, 0);

        let status = game_status(&state);
        assert_eq!(status.round, 4);
        assert!(status.game_over);
        assert_eq!(status.last_result, "Bot won the round");
    }
}
