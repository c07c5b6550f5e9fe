//! The `BehaviorModel` trait: the seam between the round loop and the
//! decision rules.

use wr_agent::KnowledgeBase;
use wr_core::{AgentId, AgentRng};

use crate::{Action, BehaviorResult, policy};

/// Pluggable robot behaviour.
///
/// The round loop calls [`decide`](Self::decide) once per robot per round,
/// after merging the robot's latest observation into its knowledge base.
///
/// # Thread safety
///
/// With `wr-sim`'s `parallel` feature, `decide` runs for many robots at once
/// on Rayon, so implementations must be `Send + Sync`.  Per-robot state
/// belongs in the knowledge base, not in the model.
pub trait BehaviorModel: Send + Sync + 'static {
    fn decide(
        &self,
        agent:     AgentId,
        knowledge: &KnowledgeBase,
        rng:       &mut AgentRng,
    ) -> BehaviorResult<Action>;
}

/// The colour-zoned collect / compact / relay policy in [`policy`].
pub struct ZonePolicy;

impl BehaviorModel for ZonePolicy {
    fn decide(
        &self,
        _agent:    AgentId,
        knowledge: &KnowledgeBase,
        rng:       &mut AgentRng,
    ) -> BehaviorResult<Action> {
        policy::decide(knowledge, rng)
    }
}
