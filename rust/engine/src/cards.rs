use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CodeKind, PokerError};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits carry no strength; their order only keeps card sorting deterministic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit (D)
    Diamonds,
    /// Hearts suit (H)
    Hearts,
    /// Spades suit (S)
    Spades,
    /// Clubs suit (C)
    Clubs,
}

impl Suit {
    /// One-character code used in card notation.
    pub fn code(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    /// Parses a suit code. Matching is exact: `'h'` is not `'H'`.
    pub fn parse(code: char) -> Result<Suit, PokerError> {
        all_suits()
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(PokerError::InvalidCode {
                kind: CodeKind::Suit,
                code,
            })
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Ace is always high; there is no Ace-low ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Numeric value, 2 through 14.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// One-character code used in card notation.
    pub fn code(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Parses a rank code. Matching is exact: `'t'` is not `'T'`.
    pub fn parse(code: char) -> Result<Rank, PokerError> {
        all_ranks()
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or(PokerError::InvalidCode {
                kind: CodeKind::Rank,
                code,
            })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Represents a single playing card with a rank and suit.
///
/// The derived order compares rank first and suit second, which is the order
/// a [`Hand`](crate::hand::Hand) keeps its cards in. Hand strength never looks
/// at the suit order; use [`Card::cmp_rank`] for strength comparisons.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Parses a two-character token such as `"TD"` or `"4H"`.
    pub fn parse(token: &str) -> Result<Card, PokerError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Card {
                rank: Rank::parse(r)?,
                suit: Suit::parse(s)?,
            }),
            _ => Err(PokerError::InvalidToken(token.to_string())),
        }
    }

    /// Compares by rank only.
    pub fn cmp_rank(&self, other: &Card) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

/// Parses whitespace separated card tokens, e.g. `"4H 4C 6S 7S KD"`.
///
/// Returns every card found (possibly none) or the first token error.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, PokerError> {
    s.split_whitespace().map(Card::parse).collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
