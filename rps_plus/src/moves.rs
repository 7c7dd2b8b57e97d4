use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidMove;

/// A move in Rock-Paper-Scissors-Plus.
///
/// The three classic moves plus [`Bomb`](Move::Bomb), which beats every
/// standard move but may only be played once per side per game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

/// The moves that are always legal, i.e. everything except the bomb.
pub static STANDARD_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

impl Move {
    /// Whether this move wins against `other` in the standard three-move
    /// cycle. The bomb sits outside the cycle and never wins through this
    /// function; the round resolver handles it before the cycle is consulted.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// The move name with a leading capital, for round explanations.
    pub fn title_case(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Bomb => "Bomb",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    /// Case-insensitive, surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            "bomb" => Ok(Move::Bomb),
            _ => Err(InvalidMove::UnrecognizedMove { input: normalized }),
        }
    }
}
