use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rps_plus::{
    BotMove, Move, MoveValidation, Request, ResetConfirmation, RoundOutcome, RoundReport,
    StatusReport, Winner, STANDARD_MOVES,
};
use tracing::debug;

use crate::recording::Recorder;
use crate::tools::RefereeProcess;

/// Final outcome of one three-round game, decided on round wins.
pub enum GameResult {
    WonByUser,
    WonByBot,
    Tie,
}

/// Picks the simulated user's move uniformly among the currently-legal
/// options: the bomb is only on the menu while the status says it is
/// available.
fn scripted_user_move(status: &StatusReport, rng: &mut StdRng) -> Move {
    let mut options: Vec<Move> = STANDARD_MOVES.to_vec();
    if status.user_bomb_available {
        options.push(Move::Bomb);
    }
    *options.choose(rng).unwrap()
}

/// Plays one full game through the documented per-round tool sequence:
/// status check, user move, validate, bot move, resolve, update.
///
/// Returns an error only on communication failure or a protocol violation;
/// the scripted user never submits a move the referee would reject.
pub fn play_game(
    rng: &mut StdRng,
    referee: &mut RefereeProcess,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    let reset: ResetConfirmation = referee.call(recorder, &Request::ResetGame)?;
    anyhow::ensure!(reset.ready, "Referee did not confirm the new game");

    let mut user_rounds = 0u32;
    let mut bot_rounds = 0u32;

    loop {
        let status: StatusReport = referee.call(recorder, &Request::GetStatus)?;

        let user_move = scripted_user_move(&status, rng);
        let validation: MoveValidation = referee.call(
            recorder,
            &Request::ValidateMove {
                raw_move: user_move.to_string(),
            },
        )?;
        anyhow::ensure!(
            validation.valid,
            "Scripted move '{}' was rejected: {}",
            user_move,
            validation.message
        );

        let BotMove { chosen: bot_move } = referee.call(recorder, &Request::ChooseBotMove)?;
        let outcome: RoundOutcome = referee.call(
            recorder,
            &Request::ResolveRound {
                user_move,
                bot_move,
            },
        )?;
        match outcome.winner {
            Winner::User => user_rounds += 1,
            Winner::Bot => bot_rounds += 1,
            Winner::Draw => {}
        }

        let report: RoundReport = referee.call(
            recorder,
            &Request::UpdateGameState {
                user_move,
                bot_move,
                round_winner: outcome.winner,
            },
        )?;
        debug!(
            round = report.round_completed,
            user_move = %user_move,
            bot_move = %bot_move,
            score = %report.current_score,
            "{}",
            outcome.explanation
        );
        if report.game_over {
            break;
        }
    }

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }

    let game_result = match user_rounds.cmp(&bot_rounds) {
        Ordering::Greater => GameResult::WonByUser,
        Ordering::Equal => GameResult::Tie,
        Ordering::Less => GameResult::WonByBot,
    };
    Ok(game_result)
}
