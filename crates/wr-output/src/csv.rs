//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `robot_snapshots.csv`
//! - `round_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RobotSnapshotRow, RoundSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 7] =
    ["robot_id", "round", "color", "x", "y", "carried", "handoff_hints"];

pub const SUMMARY_HEADER: [&str; 8] = [
    "round",
    "green_placed",
    "yellow_placed",
    "red_placed",
    "held",
    "destroyed",
    "delivered",
    "pending_messages",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("robot_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("round_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[RobotSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.robot_id.to_string(),
                row.round.to_string(),
                row.color.as_str().to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.carried.to_string(),
                row.handoff_hints.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.round.to_string(),
            row.green_placed.to_string(),
            row.yellow_placed.to_string(),
            row.red_placed.to_string(),
            row.held.to_string(),
            row.destroyed.to_string(),
            row.delivered.to_string(),
            row.pending_messages.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
