//! The `Sim` struct and its round loop.

use tracing::info;

use wr_agent::AgentRngs;
use wr_behavior::{Action, BehaviorModel};
use wr_core::{Round, WorldConfig};

use crate::{ActivationOrder, Environment, RoundSummary, SimError, SimObserver, SimResult, StepRecord};

/// The main simulation runner.
///
/// `Sim<B, S>` owns the world and drives the three-phase round loop
/// described in the [crate docs](crate).  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel, S: ActivationOrder> {
    pub config: WorldConfig,

    /// Grid, wastes, robots and mailbox.
    pub env: Environment,

    /// Per-robot RNGs, kept apart from the robots for the split borrow in
    /// the decide phase.
    pub rngs: AgentRngs,

    pub behavior: B,

    /// Per-round activation order for the apply phase.
    pub order: S,
}

impl<B: BehaviorModel, S: ActivationOrder> Sim<B, S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// The last completed round; `Round::ZERO` before the first step.
    #[inline]
    pub fn round(&self) -> Round {
        self.env.round()
    }

    /// Run until `config.last_round()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.round() < self.config.last_round() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.round());
        info!(rounds = self.round().0, "run complete");
        Ok(())
    }

    /// Run exactly `n` more rounds, ignoring `last_round`.
    pub fn run_rounds<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Simulate one round: dispatch, decide, apply.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RoundSummary> {
        let round = self.round().next();
        self.env.begin_round(round);
        observer.on_round_start(round);

        // ── Phase 1: dispatch ─────────────────────────────────────────────
        //
        // Runs before anyone acts, so messages sent below wait a round.
        let delivered = self.env.dispatch_round();
        observer.on_dispatch(round, delivered);

        // ── Phase 2: perceive + decide ────────────────────────────────────
        let actions = self.decide_all()?;

        // ── Phase 3: apply ────────────────────────────────────────────────
        let ids = self.env.robots().ids();
        for agent in self.order.order(&ids) {
            let action = actions[agent.index()];
            let obs = self.env.apply(agent, action)?;
            let robot = self.env.robots_mut().get_mut(agent);
            observer.on_agent_step(&StepRecord {
                round,
                agent,
                color:            robot.color(),
                action,
                position:         obs.position,
                carried:          obs.carry.len(),
                handoff_received: obs.incoming_handoff,
            });
            robot.last_observation = Some(obs);
        }

        let summary = self.env.summary(delivered);
        observer.on_round_end(&summary);
        let interval = self.config.snapshot_interval_rounds;
        if interval > 0 && round.0 % interval == 0 {
            observer.on_snapshot(round, &self.env);
        }
        Ok(summary)
    }

    // ── Decide phase ──────────────────────────────────────────────────────

    /// Merge each robot's cached observation and ask the behavior model for
    /// its action.  Indexed by `AgentId`.
    ///
    /// With the `parallel` Cargo feature this runs on Rayon's thread pool;
    /// each robot touches only its own knowledge and RNG.
    fn decide_all(&mut self) -> SimResult<Vec<Action>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let behavior = &self.behavior;
        let robots   = self.env.robots_mut().as_mut_slice();
        let rngs     = self.rngs.inner.as_mut_slice();

        #[cfg(not(feature = "parallel"))]
        {
            robots
                .iter_mut()
                .zip(rngs.iter_mut())
                .map(|(robot, rng)| {
                    robot.perceive();
                    behavior
                        .decide(robot.id, &robot.knowledge, rng)
                        .map_err(|source| SimError::Behavior { agent: robot.id, source })
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            robots
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .map(|(robot, rng)| {
                    robot.perceive();
                    behavior
                        .decide(robot.id, &robot.knowledge, rng)
                        .map_err(|source| SimError::Behavior { agent: robot.id, source })
                })
                .collect()
        }
    }
}
