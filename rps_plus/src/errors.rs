/// The error type for [`validate_move`](crate::validate_move), i.e. for
/// checking a single raw move string.
///
/// A rejected move is an answer, not a failure: the tool surface reports it
/// as a normal `valid = false` response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    /// The input is not in the move vocabulary.
    UnrecognizedMove { input: String },
    /// The side already played its bomb earlier in this game.
    BombAlreadyUsed,
}

impl std::error::Error for InvalidMove {}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::UnrecognizedMove { input } => write!(
                f,
                "'{}' is not a valid move. Choose: rock, paper, scissors, or bomb",
                input
            ),
            InvalidMove::BombAlreadyUsed => write!(
                f,
                "You already used your bomb! Choose rock, paper, or scissors"
            ),
        }
    }
}
