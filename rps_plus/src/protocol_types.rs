use serde::{Deserialize, Serialize};

use crate::{Move, Winner};

/// A tool call from the orchestrating agent.
///
/// One request is sent per line as a JSON document, and the referee answers
/// with a single response line. The expected response type is noted on each
/// variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Check a raw move string against the rules for the user side.
    ///
    /// The response is a [`MoveValidation`].
    ValidateMove {
        /// The move exactly as the user typed it.
        #[serde(rename = "move")]
        raw_move: String,
    },
    /// Ask the referee to pick the bot's move for the current round.
    ///
    /// The response is a [`BotMove`].
    ChooseBotMove,
    /// Determine the winner of two validated moves.
    ///
    /// The response is a [`RoundOutcome`](crate::RoundOutcome).
    ResolveRound { user_move: Move, bot_move: Move },
    /// Apply a resolved round to the game state. `round_winner` must come
    /// from a `ResolveRound` call for the same two moves.
    ///
    /// The response is a [`RoundReport`](crate::RoundReport).
    UpdateGameState {
        user_move: Move,
        bot_move: Move,
        round_winner: Winner,
    },
    /// Snapshot the current game state.
    ///
    /// The response is a [`StatusReport`].
    GetStatus,
    /// Discard the current game and start a fresh one.
    ///
    /// The response is a [`ResetConfirmation`].
    ResetGame,
    /// The referee should shut down. No response is sent.
    Bye,
}

/// Verdict on a single raw move string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveValidation {
    pub valid: bool,
    /// The trimmed, lowercased move, or the empty string when rejected.
    pub normalized_move: String,
    pub message: String,
}

/// The bot's chosen move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BotMove {
    #[serde(rename = "move")]
    pub chosen: Move,
}

/// Read-only snapshot of the game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusReport {
    pub round: u32,
    pub score: String,
    pub user_bomb_available: bool,
    pub bot_bomb_available: bool,
    pub game_over: bool,
    pub last_result: String,
}

/// Confirmation that a fresh game has started.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetConfirmation {
    pub status: String,
    pub ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_parse_from_tagged_json() {
        let req: Request =
            serde_json::from_str(r#"{"type":"ValidateMove","move":" ROCK "}"#).unwrap();
        assert!(matches!(req, Request::ValidateMove { raw_move } if raw_move == " ROCK "));

        let req: Request = serde_json::from_str(
            r#"{"type":"UpdateGameState","user_move":"rock","bot_move":"bomb","round_winner":"bot"}"#,
        )
        .unwrap();
        assert!(matches!(
            req,
            Request::UpdateGameState {
                user_move: Move::Rock,
                bot_move: Move::Bomb,
                round_winner: Winner::Bot,
            }
        ));

        let req: Request = serde_json::from_str(r#"{"type":"GetStatus"}"#).unwrap();
        assert!(matches!(req, Request::GetStatus));
    }

    #[test]
    fn bot_move_serializes_under_the_move_key() {
        let json = serde_json::to_string(&BotMove {
            chosen: Move::Scissors,
        })
        .unwrap();
        assert_eq!(json, r#"{"move":"scissors"}"#);
    }
}
