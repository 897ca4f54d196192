//! # Showdown CLI Library
//!
//! Command-line front end for the `showdown-engine` five-card hand evaluator.
//! The main job is counting how often player 1 beats player 2 over a file of
//! ten-card lines; the other subcommands help inspect and generate input.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "count", "--input", "data/hands.txt"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `count`: Tally player 1 wins, player 2 wins and ties over an input file or stdin
//! - `compare`: Evaluate two hands and name the winner
//! - `deal`: Generate random input lines
//! - `bench`: Benchmark hand construction and comparison
//! - `cfg`: Display current configuration settings

#[macro_use]
mod macros;

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_compare_command, handle_count_command,
    handle_deal_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors. Malformed lines seen by
/// `count` are reported but do not make the run fail.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["showdown", "compare", "4H 4C 6S 7S KD", "2C 3S 9S 9D TD"];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["count", "compare", "deal", "bench", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = ShowdownCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: showdown <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: showdown --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Count {
                    input,
                    log,
                    format,
                    ignore_case,
                    allow_duplicates,
                } => {
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    handle_count_command(
                        input,
                        log,
                        format,
                        ignore_case,
                        allow_duplicates,
                        out,
                        err,
                        &mut stdin_lock,
                    )
                }
                Commands::Compare { first, second } => {
                    handle_compare_command(&first, &second, out)
                }
                Commands::Deal {
                    pairs,
                    seed,
                    output,
                } => handle_deal_command(pairs, seed, output, out),
                Commands::Bench { iters } => handle_bench_command(iters, out),
                Commands::Cfg => handle_cfg_command(out, err),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    tracing::debug!(error = ?e, "command failed");
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            }
        }
    }
}
