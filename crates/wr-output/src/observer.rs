//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use wr_core::Round;
use wr_sim::{Environment, RoundSummary, SimObserver};

use crate::row::{RobotSnapshotRow, RoundSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes robot snapshots and round summaries to an
/// [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first write error is kept and the rest
/// are dropped.  Check [`take_error`][Self::take_error] after `sim.run()`.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; later errors are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_round_end(&mut self, summary: &RoundSummary) {
        let result = self.writer.write_round_summary(&RoundSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, round: Round, env: &Environment) {
        let rows: Vec<RobotSnapshotRow> = env
            .robots()
            .iter()
            .map(|robot| RobotSnapshotRow::from_robot(round, robot))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_round: Round) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
