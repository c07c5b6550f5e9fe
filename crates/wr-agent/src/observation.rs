//! What a robot perceives after acting.

use wr_core::{AgentId, Color, Pos, Round, WasteId};

use crate::Waste;

/// A snapshot of one entity in a cell, taken when the observation was built.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellContent {
    Tile { color: Color },
    Waste { id: WasteId, color: Color },
    Robot { id: AgentId, color: Color },
}

impl CellContent {
    /// `Some(color)` if this is a waste.
    #[inline]
    pub fn waste_color(&self) -> Option<Color> {
        match *self {
            CellContent::Waste { color, .. } => Some(color),
            _ => None,
        }
    }
}

/// One visible cell and what was on it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CellView {
    pub pos:      Pos,
    pub contents: Vec<CellContent>,
}

impl CellView {
    /// `true` if a placed waste of `color` was seen here.
    pub fn has_waste(&self, color: Color) -> bool {
        self.contents.iter().any(|c| c.waste_color() == Some(color))
    }
}

/// The percept returned by the environment transition.
///
/// `neighbours` is the robot's Moore neighbourhood (centre included),
/// restricted to columns the robot can reach, in grid enumeration order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Observation {
    /// The round this observation was produced in.
    pub round:                Round,
    pub neighbours:           Vec<CellView>,
    pub position:             Pos,
    pub carry:                Vec<Waste>,
    /// Hand-off location read from the inbox this round, if any.
    pub incoming_handoff:     Option<Pos>,
    pub waste_just_picked_up: bool,
}
