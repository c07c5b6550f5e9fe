//! `wr-output`: simulation output writers for the waste-relay simulation.
//!
//! | Backend     | Files created                                       |
//! |-------------|-----------------------------------------------------|
//! | CSV         | `robot_snapshots.csv`, `round_summaries.csv`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wr_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wr_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RobotSnapshotRow, RoundSummaryRow};
pub use writer::OutputWriter;
