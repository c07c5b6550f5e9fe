//! Observer hooks for progress reporting and data collection.

use tracing::{debug, info};

use wr_behavior::Action;
use wr_core::{AgentId, Color, Pos, Round};

use crate::Environment;

/// One robot's applied action, reported after the environment transition.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StepRecord {
    pub round:            Round,
    pub agent:            AgentId,
    pub color:            Color,
    pub action:           Action,
    /// Position after the action.
    pub position:         Pos,
    /// Carry-list length after the action.
    pub carried:          usize,
    /// Hand-off location the robot read from its inbox this step.
    pub handoff_received: Option<Pos>,
}

/// Whole-world figures at the end of a round.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct RoundSummary {
    pub round:            Round,
    /// Wastes lying on the grid, indexed by `Color::index()`.
    pub placed:           [usize; 3],
    /// Wastes in robots' carry-lists.
    pub held:             usize,
    /// Wastes consumed by transformation since the start.
    pub destroyed:        u64,
    /// Inbox copies made by this round's dispatch.
    pub delivered:        usize,
    /// Messages waiting for next round's dispatch.
    pub pending_messages: usize,
}

impl RoundSummary {
    /// Placed wastes of one colour.
    #[inline]
    pub fn placed(&self, color: Color) -> usize {
        self.placed[color.index()]
    }

    /// Wastes still in the system, placed or held.
    pub fn live(&self) -> usize {
        self.placed.iter().sum::<usize>() + self.held
    }
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the round loop.
///
/// All methods have default no-op implementations.
///
/// # Example: red waste counter
///
/// ```rust,ignore
/// struct RedCount(Vec<usize>);
///
/// impl SimObserver for RedCount {
///     fn on_round_end(&mut self, summary: &RoundSummary) {
///         self.0.push(summary.placed(Color::Red));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Before the round's dispatch.
    fn on_round_start(&mut self, _round: Round) {}

    /// After the dispatch; `delivered` is the number of inbox copies made.
    fn on_dispatch(&mut self, _round: Round, _delivered: usize) {}

    /// After each robot's action is applied, in activation order.
    fn on_agent_step(&mut self, _record: &StepRecord) {}

    fn on_round_end(&mut self, _summary: &RoundSummary) {}

    /// Every `config.snapshot_interval_rounds` rounds, after `on_round_end`.
    ///
    /// Read-only access to the whole world so output writers can record
    /// per-robot state without the sim knowing any file format.
    fn on_snapshot(&mut self, _round: Round, _env: &Environment) {}

    /// Once, after the last round.
    fn on_sim_end(&mut self, _final_round: Round) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs round summaries at `info` and individual steps at `debug`.
pub struct TracingObserver;

impl SimObserver for TracingObserver {
    fn on_agent_step(&mut self, r: &StepRecord) {
        debug!(
            round = r.round.0,
            agent = %r.agent,
            color = %r.color,
            action = %r.action,
            carried = r.carried,
            "step"
        );
    }

    fn on_round_end(&mut self, s: &RoundSummary) {
        info!(
            round = s.round.0,
            green = s.placed(Color::Green),
            yellow = s.placed(Color::Yellow),
            red = s.placed(Color::Red),
            held = s.held,
            destroyed = s.destroyed,
            pending = s.pending_messages,
            "round complete"
        );
    }

    fn on_sim_end(&mut self, final_round: Round) {
        info!(%final_round, "simulation finished");
    }
}
