//! Bench command handler for hand construction and comparison throughput.

use crate::error::CliError;
use crate::validation::CARDS_PER_LINE;
use showdown_engine::deck::Deck;
use showdown_engine::showdown::{compare_hands, Outcome};
use std::io::Write;

/// Handle the bench command.
///
/// Deals `iters` pairs of hands from a deck seeded with 1, reshuffling
/// whenever fewer than ten cards remain, and compares each pair. Reports the
/// comparison count, elapsed time and how the outcomes split.
pub fn handle_bench_command(iters: usize, out: &mut dyn Write) -> Result<(), CliError> {
    let start = std::time::Instant::now();
    let mut counts = [0u64; 3];
    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    for _ in 0..iters {
        if deck.remaining() < CARDS_PER_LINE {
            deck.shuffle();
        }
        let (Some(first), Some(second)) = (deck.deal_hand(), deck.deal_hand()) else {
            return Err(CliError::InvalidInput("deck ran out of cards".to_string()));
        };
        let slot = match compare_hands(&first, &second) {
            Outcome::FirstWins => 0,
            Outcome::SecondWins => 1,
            Outcome::Tie => 2,
        };
        counts[slot] += 1;
    }
    let dur = start.elapsed();
    writeln!(out, "Benchmark: {} comparisons in {:?}", iters, dur)?;
    writeln!(
        out,
        "Player 1: {}, Player 2: {}, Tied: {}",
        counts[0], counts[1], counts[2]
    )?;
    Ok(())
}
