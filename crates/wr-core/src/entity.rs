//! The closed set of things a grid cell can hold.

use std::fmt;

use crate::{AgentId, Color, WasteId};

/// A grid occupant.
///
/// Tiles carry no identity: every cell holds exactly one tile of its zone's
/// colour for the lifetime of the grid.  Wastes and robots are referenced by
/// id; their mutable state lives in the waste ledger and robot store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Entity {
    Tile(Color),
    Waste(WasteId),
    Robot(AgentId),
}

/// Discriminant of [`Entity`], used for population counts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Tile,
    Waste,
    Robot,
}

impl Entity {
    #[inline]
    pub fn kind(self) -> EntityKind {
        match self {
            Entity::Tile(_)  => EntityKind::Tile,
            Entity::Waste(_) => EntityKind::Waste,
            Entity::Robot(_) => EntityKind::Robot,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Tile(c)  => write!(f, "Tile({c})"),
            Entity::Waste(w) => write!(f, "{w}"),
            Entity::Robot(a) => write!(f, "{a}"),
        }
    }
}
