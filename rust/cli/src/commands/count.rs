//! Win counting over a file or stream of hand pairs.
//!
//! Each non-blank input line holds ten cards: five for player 1, then five
//! for player 2. The command tallies who wins each line, keeps going past
//! malformed lines (reporting each one), and prints the totals at the end.

use std::io::{BufRead, Cursor, Write};

use serde::Serialize;
use showdown_engine::logger::{ShowdownLogger, ShowdownRecord};
use showdown_engine::showdown::{compare_hands, Outcome};
use tracing::{debug, info, warn};

use crate::cli::ReportFormat;
use crate::config;
use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;
use crate::ui;
use crate::validation::{parse_line, LinePolicy};

/// Running totals for a `count` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub player1: u64,
    pub player2: u64,
    pub ties: u64,
    pub errors: u64,
    /// Non-blank lines seen, including rejected ones
    pub lines: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::FirstWins => self.player1 += 1,
            Outcome::SecondWins => self.player2 += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// Handle the count command.
///
/// # Arguments
///
/// * `input` - Hand file (plain or .zst); `None` or `"-"` reads `stdin`
/// * `log` - Optional JSONL file receiving one record per non-blank line
/// * `format` - Report format; falls back to configuration
/// * `ignore_case` / `allow_duplicates` - Line policy switches; either the
///   flag or the configuration can turn them on
/// * `out` - Output stream for the report
/// * `err` - Error stream for rejected lines
/// * `stdin` - Line source used when no input file is given
///
/// # Errors
///
/// Returns `CliError::Config` for invalid configuration and
/// `CliError::InvalidInput` when the input file cannot be read. Malformed
/// lines are counted, never returned as errors.
#[allow(clippy::too_many_arguments)]
pub fn handle_count_command(
    input: Option<String>,
    log: Option<String>,
    format: Option<ReportFormat>,
    ignore_case: bool,
    allow_duplicates: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };
    let policy = LinePolicy {
        ignore_case: ignore_case || cfg.ignore_case,
        allow_duplicates: allow_duplicates || cfg.allow_duplicates,
    };
    let format = format.unwrap_or(cfg.format);

    let mut logger = match log.as_deref() {
        Some(path) => Some(ShowdownLogger::create(path)?),
        None => None,
    };

    let tally = match input.as_deref() {
        None | Some("-") => count_lines(stdin, policy, logger.as_mut(), err)?,
        Some(path) => {
            let content = read_text_auto(path)
                .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", path, e)))?;
            count_lines(&mut Cursor::new(content), policy, logger.as_mut(), err)?
        }
    };

    if tally.lines == 0 {
        ui::display_warning(err, "no hands found in input")?;
    }
    info!(
        player1 = tally.player1,
        player2 = tally.player2,
        ties = tally.ties,
        errors = tally.errors,
        "count finished"
    );
    write_report(&tally, format, out)
}

/// Tallies every line of `reader`, reporting rejected lines to `err`.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 turn into
/// replacement characters and fail as card codes on that line alone.
pub fn count_lines(
    reader: &mut dyn BufRead,
    policy: LinePolicy,
    mut logger: Option<&mut ShowdownLogger>,
    err: &mut dyn Write,
) -> Result<Tally, CliError> {
    let mut tally = Tally::default();
    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        let line_no = idx as u64 + 1;
        let record = match parse_line(&line, policy) {
            Ok(None) => continue,
            Ok(Some((first, second))) => {
                let outcome = compare_hands(&first, &second);
                debug!(line = line_no, %first, %second, ?outcome, "compared");
                tally.record(outcome);
                logger.as_deref_mut().map(|l| {
                    let id = l.next_id();
                    (l, ShowdownRecord::decided(id, line_no, &first, &second, outcome))
                })
            }
            Err(e) => {
                tally.errors += 1;
                let report = BatchValidationError {
                    item_context: format!("Line {}", line_no),
                    message: e.to_string(),
                };
                warn!(line = line_no, error = %e, "line rejected");
                ui::write_error(err, &report.to_string())?;
                logger.as_deref_mut().map(|l| {
                    let id = l.next_id();
                    (l, ShowdownRecord::rejected(id, line_no, e.to_string()))
                })
            }
        };
        tally.lines += 1;
        if let Some((l, rec)) = record {
            l.write(&rec)?;
        }
    }
    Ok(tally)
}

fn write_report(tally: &Tally, format: ReportFormat, out: &mut dyn Write) -> Result<(), CliError> {
    match format {
        ReportFormat::Text => {
            writeln!(out, "Player 1: {}", tally.player1)?;
            writeln!(out, "Player 2: {}", tally.player2)?;
            if tally.ties > 0 {
                writeln!(out, "Tied    : {}", tally.ties)?;
            }
            if tally.errors > 0 {
                writeln!(out, "Errors  : {}", tally.errors)?;
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(tally)
                .map_err(|e| CliError::InvalidInput(format!("Failed to serialize tally: {}", e)))?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
