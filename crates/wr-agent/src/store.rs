//! Robot storage: `RobotStore` (robot state) and `AgentRngs` (per-robot RNG).
//!
//! # Why two structs?
//!
//! The decide phase needs `&mut AgentRngs` (each robot's RNG) alongside the
//! robots themselves, possibly across Rayon workers.  Keeping RNGs in a
//! separate, parallel `Vec` lets the round loop zip the two slices instead of
//! threading RNG state through the environment:
//!
//! ```ignore
//! robots.as_mut_slice()
//!     .par_iter_mut()
//!     .zip(rngs.inner.par_iter_mut())
//!     .map(|(robot, rng)| behavior.decide(robot.id, &robot.knowledge, rng))
//! ```

use wr_core::{AgentId, AgentRng, Pos, Zone};

use crate::Robot;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-robot deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-robot RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── RobotStore ────────────────────────────────────────────────────────────────

/// Dense storage for every robot.  `AgentId` is the index; robots are never
/// removed, so ids stay valid for the whole run.
#[derive(Default)]
pub struct RobotStore {
    robots: Vec<Robot>,
}

impl RobotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a robot of `zone`'s colour at `pos` and return its id.
    pub fn push(&mut self, zone: Zone, pos: Pos) -> AgentId {
        let id = AgentId(self.robots.len() as u32);
        self.robots.push(Robot::new(id, zone, pos));
        id
    }

    /// # Panics
    /// Panics if `agent` was not issued by this store.
    #[inline]
    pub fn get(&self, agent: AgentId) -> &Robot {
        &self.robots[agent.index()]
    }

    /// # Panics
    /// Panics if `agent` was not issued by this store.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut Robot {
        &mut self.robots[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Robot> {
        self.robots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Robot> {
        self.robots.iter_mut()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Robot] {
        &mut self.robots
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> Vec<AgentId> {
        (0..self.robots.len() as u32).map(AgentId).collect()
    }

    /// Robots per colour, indexed by [`wr_core::Color::index`].
    pub fn count_by_color(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for r in &self.robots {
            counts[r.color().index()] += 1;
        }
        counts
    }

    /// Total wastes currently held across all robots.
    pub fn held_wastes(&self) -> usize {
        self.robots.iter().map(|r| r.carry.len()).sum()
    }
}
