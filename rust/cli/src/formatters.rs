//! Card, hand, and evaluation formatters for terminal display.
//!
//! This module provides pure functions for formatting hands for terminal
//! output. It supports Unicode card symbols with ASCII fallback for terminal
//! environments that don't support Unicode rendering.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The module automatically detects whether the terminal supports Unicode
//! symbols by checking environment variables on Windows (WT_SESSION, TERM_PROGRAM,
//! VSCODE_INJECTION) and assumes Unicode support on Unix-like systems.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_cli::formatters::format_card;
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use showdown_engine::cards::{Card, Rank, Suit};
use showdown_engine::hand::{Category, Evaluation, Hand};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a symbol (♥ ♦ ♣ ♠) or, without Unicode, a lower-case letter.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.code().to_ascii_lowercase().to_string()
    }
}

/// Format a Card as a string combining rank code and suit.
///
/// # Example
///
/// ```rust
/// use showdown_engine::cards::{Card, Rank, Suit};
/// # use showdown_cli::formatters::format_card;
///
/// let ten_hearts = Card { rank: Rank::Ten, suit: Suit::Hearts };
/// let formatted = format_card(&ten_hearts);
/// assert!(formatted == "T♥" || formatted == "Th");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.code(), format_suit(&card.suit))
}

/// Format a hand's sorted cards in bracket notation, e.g. "[4♥ 4♣ 6♠ 7♠ K♦]".
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

/// English name of a rank, singular.
pub fn rank_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "Two",
        Rank::Three => "Three",
        Rank::Four => "Four",
        Rank::Five => "Five",
        Rank::Six => "Six",
        Rank::Seven => "Seven",
        Rank::Eight => "Eight",
        Rank::Nine => "Nine",
        Rank::Ten => "Ten",
        Rank::Jack => "Jack",
        Rank::Queen => "Queen",
        Rank::King => "King",
        Rank::Ace => "Ace",
    }
}

fn rank_plural(rank: Rank) -> String {
    match rank {
        Rank::Six => "Sixes".to_string(),
        r => format!("{}s", rank_name(r)),
    }
}

/// Describe an evaluation the way a dealer would call it.
///
/// # Example
///
/// ```rust
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::Hand;
/// # use showdown_cli::formatters::describe_evaluation;
///
/// let hand = Hand::new(&parse_cards("2H 2D 4C 4D 4S").unwrap()).unwrap();
/// assert_eq!(describe_evaluation(&hand.evaluation()), "Full house, Fours full of Twos");
/// ```
pub fn describe_evaluation(eval: &Evaluation) -> String {
    let primary = eval.primary();
    match (eval.category(), eval.secondary()) {
        (Category::OnePair, _) => format!("Pair of {}", rank_plural(primary)),
        (Category::TwoPair, Some(low)) => {
            format!("Two pair, {} over {}", rank_plural(primary), rank_plural(low))
        }
        (Category::ThreeOfAKind, _) => format!("Three {}", rank_plural(primary)),
        (Category::FullHouse, Some(pair)) => format!(
            "Full house, {} full of {}",
            rank_plural(primary),
            rank_plural(pair)
        ),
        (Category::FourOfAKind, _) => format!("Four {}", rank_plural(primary)),
        (category, _) => format!("{}, {} high", category, rank_name(primary)),
    }
}
