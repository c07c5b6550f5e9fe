//! Fluent builder for constructing `RobotStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use wr_agent::RobotStoreBuilder;
//! use wr_core::{Color, Pos, ZoneLayout};
//!
//! let layout = ZoneLayout::new(21).unwrap();
//! let (store, rngs) = RobotStoreBuilder::new(/*seed=*/ 42)
//!     .robot(layout.zone(Color::Green), Pos::new(3, 2))
//!     .robot(layout.zone(Color::Red), Pos::new(15, 0))
//!     .build();
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use wr_core::{Pos, Zone};

use crate::{AgentRngs, RobotStore};

/// Fluent builder for [`RobotStore`] + [`AgentRngs`].
///
/// Robots get ids in the order they are added; the RNGs are seeded from the
/// same ids, so the pair always lines up.
pub struct RobotStoreBuilder {
    seed:   u64,
    robots: Vec<(Zone, Pos)>,
}

impl RobotStoreBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed, robots: Vec::new() }
    }

    /// Queue a robot of `zone`'s colour at `pos`.
    pub fn robot(mut self, zone: Zone, pos: Pos) -> Self {
        self.robots.push((zone, pos));
        self
    }

    /// Queue a robot through a `&mut` borrow, for loops.
    pub fn add(&mut self, zone: Zone, pos: Pos) -> &mut Self {
        self.robots.push((zone, pos));
        self
    }

    /// Number of robots queued so far.
    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    pub fn build(self) -> (RobotStore, AgentRngs) {
        let mut store = RobotStore::new();
        for (zone, pos) in self.robots {
            store.push(zone, pos);
        }
        let rngs = AgentRngs::new(store.len(), self.seed);
        (store, rngs)
    }
}
