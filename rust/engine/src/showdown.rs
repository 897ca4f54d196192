use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Result of comparing two hands, from the first hand's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Outcome {
    /// Same showdown with the seats swapped.
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::FirstWins => f.write_str("Player 1 wins"),
            Outcome::SecondWins => f.write_str("Player 2 wins"),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

pub fn compare_hands(first: &Hand, second: &Hand) -> Outcome {
    first.compare(second).into()
}
