use std::path::PathBuf;

use clap::Parser;
use harness::{play_game, GameResult, Recorder, RefereeProcess};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the referee executable
    referee: String,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed; drives the scripted user directly and the referee's bot
    /// via a derived seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record each game's tool calls as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    user_wins: usize,
    bot_wins: usize,
    ties: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut referee = RefereeProcess::spawn(&args.referee, Some(seed.wrapping_add(1)))?;

    let mut match_score = MatchScore::default();
    for game_idx in 0..args.num_games {
        match play_game(&mut rng, &mut referee, &mut recorder)? {
            GameResult::WonByUser => {
                debug!(game_idx, "Won by the user");
                match_score.user_wins += 1;
            }
            GameResult::WonByBot => {
                debug!(game_idx, "Won by the bot");
                match_score.bot_wins += 1;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
        }
    }

    referee.shutdown()?;

    eprintln!(
        "End result:\n- {} wins by the user\n- {} wins by the bot\n- {} ties",
        match_score.user_wins, match_score.bot_wins, match_score.ties
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
