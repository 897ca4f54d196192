//! # showdown-engine: Five-Card Hand Evaluation Core
//!
//! Classifies five-card poker hands into one of nine categories and decides
//! which of two hands wins. Ace is always high, there are no wild cards, and
//! suits never break a tie.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and code parsing
//! - [`hand`] - Run-length classification and hand strength comparison
//! - [`showdown`] - Three-way outcome of a two-hand comparison
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`logger`] - JSONL history of compared hands
//! - [`errors`] - Error types for parsing and hand construction
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::hand::{Category, Hand};
//! use showdown_engine::showdown::{compare_hands, Outcome};
//!
//! let first = Hand::new(&parse_cards("2H 2D 4C 4D 4S").unwrap()).unwrap();
//! let second = Hand::new(&parse_cards("3C 3D 3S 9S 9D").unwrap()).unwrap();
//!
//! assert_eq!(first.evaluation().category(), Category::FullHouse);
//! assert_eq!(compare_hands(&first, &second), Outcome::FirstWins);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use showdown_engine::deck::Deck;
//!
//! let mut deck = Deck::new_with_seed(42);
//! deck.shuffle();
//! let hand = deck.deal_hand().expect("52 cards hold ten hands");
//! println!("{} => {}", hand, hand.evaluation());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod showdown;
