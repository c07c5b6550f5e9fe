//! Robot actions: what a robot asks the environment to do this round.

use std::fmt;

use wr_core::Pos;

/// A waste-handling operation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum HandleWaste {
    /// Take every co-located waste of the robot's colour.
    PickUp,
    /// Compact two held wastes into one of the next colour.
    Transform,
    /// Put the head of the carry-list back on the grid.
    DropOff,
    /// `DropOff`, then tell the next zone where.
    DropOffAndNotify,
}

/// One round's action.  A robot either moves or handles waste, never both.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// Step to this cell (adjacent or current).
    Move(Pos),
    Handle(HandleWaste),
}

impl Action {
    #[inline]
    pub fn movement(&self) -> Option<Pos> {
        match *self {
            Action::Move(p) => Some(p),
            Action::Handle(_) => None,
        }
    }

    #[inline]
    pub fn handle_waste(&self) -> Option<HandleWaste> {
        match *self {
            Action::Handle(h) => Some(h),
            Action::Move(_) => None,
        }
    }
}

impl HandleWaste {
    pub fn as_str(self) -> &'static str {
        match self {
            HandleWaste::PickUp           => "pick_up",
            HandleWaste::Transform        => "transform",
            HandleWaste::DropOff          => "drop_off",
            HandleWaste::DropOffAndNotify => "drop_off_notify",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(p)   => write!(f, "move {p}"),
            Action::Handle(h) => f.write_str(h.as_str()),
        }
    }
}
