//! The robot entity.

use wr_core::{AgentId, Color, Pos, Zone};

use crate::{KnowledgeBase, Message, Observation, Performative, Waste};

/// A waste-handling robot bound to one zone.
///
/// There is a single robot type; colour-specific behaviour comes from the
/// deliberation policy branching on `zone.color`, not from subtypes.
///
/// `pos` and `carry` are ground truth, written only by the environment
/// transition.  `knowledge` is the robot's possibly stale view of them.
#[derive(Clone, Debug)]
pub struct Robot {
    pub id:    AgentId,
    pub zone:  Zone,
    pub pos:   Pos,
    /// Held wastes, head first.
    pub carry: Vec<Waste>,
    pub knowledge: KnowledgeBase,
    /// Delivered, unread messages in delivery order.
    pub inbox: Vec<Message>,
    /// Percept from the robot's last action, consumed by the next
    /// [`perceive`](Self::perceive).
    pub last_observation: Option<Observation>,
}

impl Robot {
    pub fn new(id: AgentId, zone: Zone, pos: Pos) -> Self {
        Self {
            id,
            zone,
            pos,
            carry: Vec::new(),
            knowledge: KnowledgeBase::new(zone, pos),
            inbox: Vec::new(),
            last_observation: None,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.zone.color
    }

    /// Merge the cached observation into the knowledge base.
    ///
    /// The observation is taken, so calling this twice before the next
    /// action is harmless.  Returns `false` if there was nothing to merge.
    pub fn perceive(&mut self) -> bool {
        match self.last_observation.take() {
            Some(obs) => {
                self.knowledge.update(&obs);
                true
            }
            None => false,
        }
    }

    /// Read one hand-off notice: the most recently delivered one.  Older
    /// notices stay in the inbox for later rounds.
    pub fn take_handoff(&mut self) -> Option<Pos> {
        let i = self
            .inbox
            .iter()
            .rposition(|m| m.performative == Performative::InformHandoff)?;
        Some(self.inbox.remove(i).payload)
    }
}
