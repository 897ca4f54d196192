//! Deal command handler: generates random input lines for `count`.
//!
//! Every line is dealt from a freshly shuffled deck, so the ten cards on a
//! line are distinct. Lines are reproducible for a given seed.

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::validation::CARDS_PER_LINE;
use showdown_engine::deck::Deck;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Handle the deal command.
///
/// # Arguments
///
/// * `pairs` - Number of lines to deal (at least 1)
/// * `seed` - RNG seed; falls back to the configured seed, then to a random one
/// * `output` - Write lines to this file instead of `out`
/// * `out` - Output stream for dealt lines or the file summary
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// use showdown_cli::commands::deal::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(3, Some(42), None, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    pairs: usize,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if pairs == 0 {
        return Err(CliError::InvalidInput("pairs must be at least 1".to_string()));
    }
    let seed = match seed {
        Some(s) => s,
        None => config::load()
            .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?
            .seed
            .unwrap_or_else(rand::random),
    };
    info!(seed, pairs, "dealing");

    let lines = deal_lines(pairs, seed);
    match output {
        Some(path) => {
            let path = Path::new(&path);
            ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
            let mut body = lines.join("\n");
            body.push('\n');
            std::fs::write(path, body)?;
            writeln!(
                out,
                "Dealt {} lines to {} (seed {})",
                pairs,
                path.display(),
                seed
            )?;
        }
        None => {
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

fn deal_lines(pairs: usize, seed: u64) -> Vec<String> {
    let mut deck = Deck::new_with_seed(seed);
    (0..pairs)
        .map(|_| {
            deck.shuffle();
            let cards: Vec<String> = (0..CARDS_PER_LINE)
                .filter_map(|_| deck.deal_card())
                .map(|c| c.to_string())
                .collect();
            cards.join(" ")
        })
        .collect()
}
