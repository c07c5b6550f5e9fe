//! The zone deliberation policy.
//!
//! Red robots work the terminal zone: carry one unit to the grid's right
//! edge and leave it there.  Green and yellow robots collect two units of
//! their colour, compact them, carry the result to their zone's rightmost
//! column and notify the next zone.
//!
//! A relay robot compacts only a pair of its own colour.  Once the head of
//! its carry-list has been promoted, that unit is delivered before anything
//! else, so a promoted unit is never compacted again inside the same zone.
//! Surplus units of the robot's colour stay carried through the hand-off.
//!
//! The rightmost column of a zone is where hand-offs are dropped, so the
//! deterministic waste search skips it (a robot must not re-collect what it
//! just handed off).  The random fallback does not skip it.

use wr_agent::KnowledgeBase;
use wr_core::{AgentRng, Color, Pos};

use crate::{Action, BehaviorError, BehaviorResult, HandleWaste};

/// Pick this round's action.
pub fn decide(kb: &KnowledgeBase, rng: &mut AgentRng) -> BehaviorResult<Action> {
    match kb.color {
        Color::Red => decide_terminal(kb, rng),
        Color::Green | Color::Yellow => decide_relay(kb, rng),
    }
}

fn decide_terminal(kb: &KnowledgeBase, rng: &mut AgentRng) -> BehaviorResult<Action> {
    let at_edge = kb.zone.is_rightmost(kb.position);
    if !kb.carry.is_empty() {
        return Ok(if at_edge {
            Action::Handle(HandleWaste::DropOff)
        } else {
            Action::Move(step_right(kb))
        });
    }
    if waste_available(kb) && !at_edge {
        return Ok(Action::Handle(HandleWaste::PickUp));
    }
    look_for_waste(kb, rng).map(Action::Move)
}

fn decide_relay(kb: &KnowledgeBase, rng: &mut AgentRng) -> BehaviorResult<Action> {
    match kb.carry.as_slice() {
        // Already compacted: deliver the head.
        [head, ..] if head.color() != kb.color => Ok(if kb.zone.is_rightmost(kb.position) {
            Action::Handle(HandleWaste::DropOffAndNotify)
        } else {
            Action::Move(step_right(kb))
        }),
        [_, second, ..] if second.color() == kb.color => Ok(Action::Handle(HandleWaste::Transform)),
        _ => forage(kb, rng),
    }
}

fn forage(kb: &KnowledgeBase, rng: &mut AgentRng) -> BehaviorResult<Action> {
    if waste_available(kb) {
        Ok(Action::Handle(HandleWaste::PickUp))
    } else {
        look_for_waste(kb, rng).map(Action::Move)
    }
}

/// One column to the right.
///
/// # Panics
///
/// Panics on the zone's rightmost column; callers branch on that first.
pub fn step_right(kb: &KnowledgeBase) -> Pos {
    assert!(
        !kb.zone.is_rightmost(kb.position),
        "step_right at the {} zone boundary {}",
        kb.color,
        kb.position
    );
    kb.position.right()
}

/// Where to go next when there is nothing to do here.
///
/// 1. The first visible cell (observation order) holding waste of the
///    robot's colour, excluding the zone's rightmost column.
/// 2. Otherwise one greedy step towards the oldest hand-off hint.
/// 3. Otherwise any visible cell, uniformly at random.
///
/// # Errors
///
/// [`BehaviorError::NoCandidateMove`] if the robot sees no cell at all.
pub fn look_for_waste(kb: &KnowledgeBase, rng: &mut AgentRng) -> BehaviorResult<Pos> {
    let target = kb
        .neighbours
        .iter()
        .find(|cell| cell.has_waste(kb.color) && !kb.zone.is_rightmost(cell.pos));
    if let Some(cell) = target {
        return Ok(cell.pos);
    }
    if let Some(hint) = kb.oldest_hint() {
        return Ok(kb.position.step_toward(hint));
    }
    rng.choose(&kb.neighbours)
        .map(|cell| cell.pos)
        .ok_or(BehaviorError::NoCandidateMove { position: kb.position })
}

/// `true` if waste of the robot's colour was seen on its own cell.
pub fn waste_available(kb: &KnowledgeBase) -> bool {
    kb.here().is_some_and(|cell| cell.has_waste(kb.color))
}
