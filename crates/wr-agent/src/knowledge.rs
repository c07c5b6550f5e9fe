//! Per-robot belief state.

use std::collections::VecDeque;

use wr_core::{Color, Pos, Round, Zone};

use crate::{CellView, Observation, Waste};

/// What a robot believes about the world.
///
/// Everything except `handoff_hints` is overwritten from the latest
/// observation.  The hints are the only carried memory: hand-off positions
/// reported by the upstream zone, oldest first, retired only when the robot
/// picks up waste standing on one.  Unfulfilled hints never expire.
#[derive(Clone, PartialEq, Debug)]
pub struct KnowledgeBase {
    pub color:         Color,
    pub zone:          Zone,
    pub neighbours:    Vec<CellView>,
    pub position:      Pos,
    pub carry:         Vec<Waste>,
    pub handoff_hints: VecDeque<Pos>,
    /// Round of the last merged observation.
    last_merged:       Option<Round>,
}

impl KnowledgeBase {
    /// Fresh beliefs for a robot standing at `position`.
    pub fn new(zone: Zone, position: Pos) -> Self {
        Self {
            color: zone.color,
            zone,
            neighbours: Vec::new(),
            position,
            carry: Vec::new(),
            handoff_hints: VecDeque::new(),
            last_merged: None,
        }
    }

    /// Merge an observation into the beliefs.
    ///
    /// Merging the same observation twice is equivalent to merging it once:
    /// the hint list is only touched the first time a given round is seen.
    pub fn update(&mut self, obs: &Observation) {
        self.neighbours.clone_from(&obs.neighbours);
        self.position = obs.position;
        self.carry.clone_from(&obs.carry);

        if self.last_merged == Some(obs.round) {
            return;
        }
        self.last_merged = Some(obs.round);

        if let Some(hint) = obs.incoming_handoff {
            self.handoff_hints.push_back(hint);
        }
        if obs.waste_just_picked_up {
            if let Some(i) = self.handoff_hints.iter().position(|&h| h == obs.position) {
                self.handoff_hints.remove(i);
            }
        }
    }

    /// The oldest outstanding hand-off hint.
    #[inline]
    pub fn oldest_hint(&self) -> Option<Pos> {
        self.handoff_hints.front().copied()
    }

    /// The cell view for the robot's own position, if it was observed.
    pub fn here(&self) -> Option<&CellView> {
        self.neighbours.iter().find(|c| c.pos == self.position)
    }
}
