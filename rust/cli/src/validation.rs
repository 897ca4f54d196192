//! Input line validation for hand files.
//!
//! A line holds ten card tokens: the first five are player 1's hand, the last
//! five player 2's. Tokenising, the card count check and deck legality are
//! handled here, so the engine only ever sees well-formed five-card inputs.
//!
//! ## Error Handling
//!
//! Every rejection is a [`LineError`]; card and hand failures from the engine
//! pass through unchanged.

use std::collections::HashSet;

use showdown_engine::cards::{parse_cards, Card};
use showdown_engine::errors::PokerError;
use showdown_engine::hand::{Hand, HAND_SIZE};
use thiserror::Error;

/// Cards on one input line: two hands.
pub const CARDS_PER_LINE: usize = 2 * HAND_SIZE;

/// How strictly input tokens are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinePolicy {
    /// Upper-case tokens before parsing, so `th` reads as `TH`
    pub ignore_case: bool,
    /// Accept the same card more than once on a line
    pub allow_duplicates: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error(transparent)]
    Card(#[from] PokerError),
    #[error("Hands with {0} cards")]
    CardCount(usize),
    #[error("Duplicate card {0}")]
    Duplicate(Card),
}

fn read_cards(text: &str, policy: LinePolicy) -> Result<Vec<Card>, PokerError> {
    if policy.ignore_case {
        parse_cards(&text.to_ascii_uppercase())
    } else {
        parse_cards(text)
    }
}

/// Splits one input line into the two hands it describes.
///
/// Returns `Ok(None)` for a blank line, which is skipped rather than counted.
///
/// # Example
///
/// ```rust
/// use showdown_cli::validation::{parse_line, LineError, LinePolicy};
///
/// let (first, second) = parse_line("4H 4C 6S 7S KD 2C 3S 9S 9D TD", LinePolicy::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(first.to_string(), "4H 4C 6S 7S KD");
/// assert_eq!(second.to_string(), "2C 3S 9S 9D TD");
///
/// assert_eq!(parse_line("   ", LinePolicy::default()), Ok(None));
/// assert_eq!(
///     parse_line("4H 4C 6S", LinePolicy::default()),
///     Err(LineError::CardCount(3))
/// );
/// ```
pub fn parse_line(line: &str, policy: LinePolicy) -> Result<Option<(Hand, Hand)>, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let cards = read_cards(line, policy)?;
    if cards.len() != CARDS_PER_LINE {
        return Err(LineError::CardCount(cards.len()));
    }
    if !policy.allow_duplicates {
        let mut seen = HashSet::with_capacity(CARDS_PER_LINE);
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(LineError::Duplicate(*dup));
        }
    }

    let (first, second) = cards.split_at(HAND_SIZE);
    Ok(Some((Hand::new(first)?, Hand::new(second)?)))
}

/// Parses a single hand such as `"4H 4C 6S 7S KD"`.
pub fn parse_hand(text: &str, policy: LinePolicy) -> Result<Hand, PokerError> {
    Hand::new(&read_cards(text, policy)?)
}
