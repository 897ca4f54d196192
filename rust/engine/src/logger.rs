use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::showdown::Outcome;

/// One processed input line: either a decided showdown or the reason it was rejected.
/// Serialized to JSONL format for showdown history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownRecord {
    /// Unique identifier for this record (format: YYYYMMDD-NNNNNN)
    pub id: String,
    /// 1-based line number in the input
    pub line: u64,
    /// First hand, sorted, in card notation
    #[serde(default)]
    pub first: Option<String>,
    /// Second hand, sorted, in card notation
    #[serde(default)]
    pub second: Option<String>,
    #[serde(default)]
    pub first_eval: Option<String>,
    #[serde(default)]
    pub second_eval: Option<String>,
    /// Present when both hands were built and compared
    #[serde(default)]
    pub outcome: Option<Outcome>,
    /// Present when the line was rejected
    #[serde(default)]
    pub error: Option<String>,
    /// Timestamp when the line was processed (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl ShowdownRecord {
    pub fn decided(id: String, line: u64, first: &Hand, second: &Hand, outcome: Outcome) -> Self {
        Self {
            id,
            line,
            first: Some(first.to_string()),
            second: Some(second.to_string()),
            first_eval: Some(first.evaluation().to_string()),
            second_eval: Some(second.evaluation().to_string()),
            outcome: Some(outcome),
            error: None,
            ts: None,
        }
    }

    pub fn rejected(id: String, line: u64, error: impl Into<String>) -> Self {
        Self {
            id,
            line,
            first: None,
            second: None,
            first_eval: None,
            second_eval: None,
            outcome: None,
            error: Some(error.into()),
            ts: None,
        }
    }
}

pub fn format_record_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct ShowdownLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl ShowdownLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_record_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &ShowdownRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
