//! Compare command handler: evaluates two hands and names the winner.

use crate::config;
use crate::error::CliError;
use crate::formatters::{describe_evaluation, format_hand};
use crate::validation::{parse_hand, LinePolicy};
use showdown_engine::showdown::compare_hands;
use std::io::Write;

/// Handle the compare command.
///
/// Prints each hand sorted with its evaluation, then the outcome, e.g.
///
/// ```text
/// Player 1: [4♥ 4♣ 6♠ 7♠ K♦]  Pair of Fours
/// Player 2: [2♣ 3♠ 9♦ 9♠ T♦]  Pair of Nines
/// Player 2 wins
/// ```
///
/// Lower-case codes are accepted when `ignore_case` is configured. Duplicate
/// checks do not apply: each hand is read on its own.
pub fn handle_compare_command(
    first: &str,
    second: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let policy = LinePolicy {
        ignore_case: cfg.ignore_case,
        allow_duplicates: true,
    };

    let first = parse_hand(first, policy)?;
    let second = parse_hand(second, policy)?;

    for (label, hand) in [("Player 1", &first), ("Player 2", &second)] {
        writeln!(
            out,
            "{}: {}  {}",
            label,
            format_hand(hand),
            describe_evaluation(&hand.evaluation())
        )?;
    }
    writeln!(out, "{}", compare_hands(&first, &second))?;
    Ok(())
}
