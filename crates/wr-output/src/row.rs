//! Plain data row types written by output backends.

use wr_agent::Robot;
use wr_core::{Color, Round};
use wr_sim::RoundSummary;

/// One robot's state at a snapshot round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotSnapshotRow {
    pub robot_id:      u32,
    pub round:         u64,
    pub color:         Color,
    pub x:             i32,
    pub y:             i32,
    pub carried:       u32,
    /// Hand-off locations the robot still remembers.
    pub handoff_hints: u32,
}

impl RobotSnapshotRow {
    pub fn from_robot(round: Round, robot: &Robot) -> Self {
        Self {
            robot_id:      robot.id.0,
            round:         round.0,
            color:         robot.color(),
            x:             robot.pos.x,
            y:             robot.pos.y,
            carried:       robot.carry.len() as u32,
            handoff_hints: robot.knowledge.handoff_hints.len() as u32,
        }
    }
}

/// World totals at the end of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummaryRow {
    pub round:            u64,
    pub green_placed:     u64,
    pub yellow_placed:    u64,
    pub red_placed:       u64,
    pub held:             u64,
    pub destroyed:        u64,
    pub delivered:        u64,
    pub pending_messages: u64,
}

impl From<&RoundSummary> for RoundSummaryRow {
    fn from(s: &RoundSummary) -> Self {
        Self {
            round:            s.round.0,
            green_placed:     s.placed(Color::Green) as u64,
            yellow_placed:    s.placed(Color::Yellow) as u64,
            red_placed:       s.placed(Color::Red) as u64,
            held:             s.held as u64,
            destroyed:        s.destroyed,
            delivered:        s.delivered as u64,
            pending_messages: s.pending_messages as u64,
        }
    }
}
