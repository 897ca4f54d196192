//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` runs the built `showdown` binary in a scratch
//!   directory and captures stdout, stderr, exit code and duration.
//! - `temp_files`: `TempFileManager` creates input files (plain or zstd) under a
//!   temporary directory that is removed on drop.
//!
//! ```rust,ignore
//! use crate::helpers::{cli_runner::CliRunner, temp_files::TempFileManager};
//!
//! let cli = CliRunner::new().expect("cli runner");
//! let tmp = TempFileManager::new().expect("temp dir");
//! let input = tmp.create_file("hands.txt", "4H 4C 6S 7S KD 2C 3S 9S 9D TD\n").expect("write");
//! let res = cli.run(&["count", "--input", input.to_string_lossy().as_ref()]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
pub mod temp_files;

/// The five reference lines: player 1 wins lines 2, 4 and 5.
#[allow(dead_code)]
pub const REFERENCE_LINES: &str = "\
4H 4C 6S 7S KD 2C 3S 9S 9D TD
5D 8C 9S JS AC 2C 5C 7D 8S QH
2D 9C AS AH AC 3D 6D 7D TD QD
4D 6S 9H QH QC 3D 6D 7H QD QS
2H 2D 4C 4D 4S 3C 3D 3S 9S 9D
";
