//! Command-line definitions for the `showdown` binary.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Five-card poker hand evaluation and win counting"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count player 1 wins, player 2 wins and ties over lines of ten cards
    Count {
        /// Input file (plain or .zst); reads stdin when omitted or "-"
        #[arg(long)]
        input: Option<String>,
        /// Write one JSONL record per processed line to this file
        #[arg(long)]
        log: Option<String>,
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
        /// Accept lower-case card codes
        #[arg(long)]
        ignore_case: bool,
        /// Accept the same card twice on one line
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Compare two hands given as quoted card lists, e.g. "4H 4C 6S 7S KD"
    Compare { first: String, second: String },
    /// Deal random lines of ten distinct cards in `count` input format
    Deal {
        #[arg(long, default_value_t = 1)]
        pairs: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Benchmark hand construction and comparison
    Bench {
        #[arg(long, default_value_t = 10_000)]
        iters: usize,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// Shape of the `count` summary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}
