use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rps_plus::{
    apply_round, choose_bot_move, game_status, resolve_round, validate_move, BotMove, GameState,
    MoveValidation, Request, ResetConfirmation, Side,
};
use tracing::{info, trace};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed for the bot's move selection
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    Referee {
        state: GameState::new(),
        rng,
    }
    .run()
}

/// Owns the single live game and answers tool calls against it.
struct Referee {
    state: GameState,
    rng: StdRng,
}

impl Referee {
    /// Serves tool calls until EOF or a `Bye` request.
    ///
    /// Communication happens through stdin/stdout, one JSON document per
    /// line. Logging goes to stderr, since stdout carries the protocol.
    fn run(&mut self) -> anyhow::Result<()> {
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because stdin.read_line() appends to the buffer
            use std::io::BufRead;
            let num_bytes_read = stdin.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the orchestrator has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;
            trace!(request = ?req);

            match req {
                Request::ValidateMove { raw_move } => {
                    serde_json::to_writer(&mut stdout, &self.validate(&raw_move))?
                }
                Request::ChooseBotMove => {
                    let chosen = choose_bot_move(&self.state, &mut self.rng);
                    serde_json::to_writer(&mut stdout, &BotMove { chosen })?
                }
                Request::ResolveRound {
                    user_move,
                    bot_move,
                } => serde_json::to_writer(&mut stdout, &resolve_round(user_move, bot_move))?,
                Request::UpdateGameState {
                    user_move,
                    bot_move,
                    round_winner,
                } => {
                    let report = apply_round(&mut self.state, user_move, bot_move, round_winner);
                    serde_json::to_writer(&mut stdout, &report)?
                }
                Request::GetStatus => {
                    serde_json::to_writer(&mut stdout, &game_status(&self.state))?
                }
                Request::ResetGame => {
                    self.state = GameState::new();
                    serde_json::to_writer(
                        &mut stdout,
                        &ResetConfirmation {
                            status: String::from("New game started"),
                            ready: true,
                        },
                    )?
                }
                Request::Bye => break Ok(()),
            }
            use std::io::Write;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }

    /// Validation rejections are answers, not errors: they come back as a
    /// normal response with `valid` unset.
    fn validate(&self, raw_move: &str) -> MoveValidation {
        match validate_move(&self.state, Side::User, raw_move) {
            Ok(mv) => MoveValidation {
                valid: true,
                normalized_move: mv.to_string(),
                message: String::from("Valid move"),
            },
            Err(err) => MoveValidation {
                valid: false,
                normalized_move: String::new(),
                message: err.to_string(),
            },
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
