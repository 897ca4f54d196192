use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::cards::{Card, Rank};
use crate::errors::PokerError;

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus the ranks that order hands within it, excluding the final
/// card-by-card comparison which [`Hand::compare`] performs.
///
/// `secondary` is set only for two pair (the lower pair) and full house (the
/// pair), so two evaluations of the same category either both carry it or
/// both lack it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Evaluation {
    category: Category,
    primary: Rank,
    secondary: Option<Rank>,
}

impl Evaluation {
    fn single(category: Category, primary: Rank) -> Self {
        Self {
            category,
            primary,
            secondary: None,
        }
    }

    fn double(category: Category, primary: Rank, secondary: Rank) -> Self {
        Self {
            category,
            primary,
            secondary: Some(secondary),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn primary(&self) -> Rank {
        self.primary
    }

    pub fn secondary(&self) -> Option<Rank> {
        self.secondary
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then(self.primary.cmp(&other.primary))
            .then_with(|| match (self.secondary, other.secondary) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.primary)?;
        if let Some(second) = self.secondary {
            write!(f, "/{}", second)?;
        }
        Ok(())
    }
}

/// A maximal run of equal ranks in a sorted hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Run {
    rank: Rank,
    len: u8,
}

/// Run-length signature of a sorted hand, runs in ascending rank order.
fn runs(sorted: &[Card; HAND_SIZE]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::with_capacity(HAND_SIZE);
    for c in sorted {
        match runs.last_mut() {
            Some(run) if run.rank == c.rank => run.len += 1,
            _ => runs.push(Run {
                rank: c.rank,
                len: 1,
            }),
        }
    }
    runs
}

/// Classifies five cards sorted by rank (then suit).
///
/// # Panics
///
/// Panics on a run-length signature outside the seven achievable with at most
/// four cards per rank. [`Hand::new`] rejects five-of-a-rank input before it
/// gets here, so a panic means the classifier itself is incomplete.
pub fn evaluate(sorted: &[Card; HAND_SIZE]) -> Evaluation {
    use Category::*;

    let runs = runs(sorted);
    // runs ascend by rank, so of two equal-length runs the later one is higher
    match runs.as_slice() {
        [Run { len: 4, rank }, Run { len: 1, .. }] | [Run { len: 1, .. }, Run { len: 4, rank }] => {
            Evaluation::single(FourOfAKind, *rank)
        }
        [Run { len: 3, rank: trips }, Run { len: 2, rank: pair }]
        | [Run { len: 2, rank: pair }, Run { len: 3, rank: trips }] => {
            Evaluation::double(FullHouse, *trips, *pair)
        }
        [Run { len: 3, rank }, Run { len: 1, .. }, Run { len: 1, .. }]
        | [Run { len: 1, .. }, Run { len: 3, rank }, Run { len: 1, .. }]
        | [Run { len: 1, .. }, Run { len: 1, .. }, Run { len: 3, rank }] => {
            Evaluation::single(ThreeOfAKind, *rank)
        }
        [Run { len: 2, rank: low }, Run { len: 2, rank: high }, Run { len: 1, .. }]
        | [Run { len: 2, rank: low }, Run { len: 1, .. }, Run { len: 2, rank: high }]
        | [Run { len: 1, .. }, Run { len: 2, rank: low }, Run { len: 2, rank: high }] => {
            Evaluation::double(TwoPair, *high, *low)
        }
        [Run { len: 2, rank }, Run { len: 1, .. }, Run { len: 1, .. }, Run { len: 1, .. }]
        | [Run { len: 1, .. }, Run { len: 2, rank }, Run { len: 1, .. }, Run { len: 1, .. }]
        | [Run { len: 1, .. }, Run { len: 1, .. }, Run { len: 2, rank }, Run { len: 1, .. }]
        | [Run { len: 1, .. }, Run { len: 1, .. }, Run { len: 1, .. }, Run { len: 2, rank }] => {
            Evaluation::single(OnePair, *rank)
        }
        [_, _, _, _, _] => evaluate_distinct(sorted),
        other => unreachable!("unclassified run-length signature {:?}", other),
    }
}

fn evaluate_distinct(sorted: &[Card; HAND_SIZE]) -> Evaluation {
    let low = sorted[0].rank;
    let high = sorted[HAND_SIZE - 1].rank;
    // Ace plays high only: A-2-3-4-5 is not a straight
    let straight = high.value() - low.value() == 4;
    let flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let category = match (straight, flush) {
        (true, true) => Category::StraightFlush,
        (false, true) => Category::Flush,
        (true, false) => Category::Straight,
        (false, false) => Category::HighCard,
    };
    Evaluation::single(category, high)
}

/// Five cards, kept sorted, with their evaluation computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    evaluation: Evaluation,
}

impl Hand {
    /// Builds a hand from exactly five cards in any order.
    ///
    /// Duplicate cards are accepted; deck legality is the caller's concern.
    /// Five cards of a single rank cannot be classified and are rejected.
    pub fn new(cards: &[Card]) -> Result<Hand, PokerError> {
        let mut sorted: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| PokerError::WrongCardCount(cards.len()))?;
        sorted.sort_unstable();
        if sorted[0].rank == sorted[HAND_SIZE - 1].rank {
            return Err(PokerError::TooManyOfRank {
                rank: sorted[0].rank,
                count: HAND_SIZE,
            });
        }
        let evaluation = evaluate(&sorted);
        Ok(Hand {
            cards: sorted,
            evaluation,
        })
    }

    /// Cards in ascending rank order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Orders two hands by strength.
    ///
    /// Evaluations decide first. Equal evaluations fall back to comparing
    /// ranks from the highest card down; suits never break a tie.
    pub fn compare(&self, other: &Hand) -> Ordering {
        self.evaluation.cmp(&other.evaluation).then_with(|| {
            self.cards
                .iter()
                .rev()
                .zip(other.cards.iter().rev())
                .map(|(a, b)| a.cmp_rank(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = PokerError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PokerError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
