//! Activation order: which robot acts first within a round.
//!
//! The order only matters for the apply phase: decisions are taken from
//! each robot's own knowledge before anyone acts.  Two robots racing for the
//! same waste are resolved by whoever is applied first.

use wr_core::{AgentId, SimRng};

/// Supplies the per-round iteration order over live robots.
pub trait ActivationOrder: Send {
    /// A permutation of `agents` (ascending ids) for this round.
    fn order(&mut self, agents: &[AgentId]) -> Vec<AgentId>;
}

/// Ascending id order every round.  Deterministic without a seed; used by
/// tests and scenario scripts.
pub struct FixedOrder;

impl ActivationOrder for FixedOrder {
    fn order(&mut self, agents: &[AgentId]) -> Vec<AgentId> {
        agents.to_vec()
    }
}

/// A fresh uniform shuffle every round.
pub struct RandomOrder {
    rng: SimRng,
}

impl RandomOrder {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }

    /// Shorthand for `RandomOrder::new(SimRng::new(seed).child(1))`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimRng::new(seed).child(1))
    }
}

impl ActivationOrder for RandomOrder {
    fn order(&mut self, agents: &[AgentId]) -> Vec<AgentId> {
        let mut order = agents.to_vec();
        self.rng.shuffle(&mut order);
        order
    }
}
