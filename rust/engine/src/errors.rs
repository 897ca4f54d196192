use thiserror::Error;

use crate::cards::Rank;

/// Which half of a card code failed to parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodeKind {
    Rank,
    Suit,
}

impl std::fmt::Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeKind::Rank => f.write_str("rank"),
            CodeKind::Suit => f.write_str("suit"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PokerError {
    #[error("Invalid {kind} code: {code}")]
    InvalidCode { kind: CodeKind, code: char },
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Hand with illegal card count {0}")]
    WrongCardCount(usize),
    #[error("Hand with {count} cards of rank {rank}")]
    TooManyOfRank { rank: Rank, count: usize },
}
